use std::path::{Path, PathBuf};

use crate::error::{RadViewError, Result};
use crate::io::dicom::{ensure_dcm_extension, validate_signature};

/// Deferred producer for the DICOM binary, used when the caller fetches the
/// bytes on demand (e.g. from an archive service).
pub type FetchFn = Box<dyn FnOnce() -> Result<Vec<u8>> + Send>;

/// Candidate sources for one export, resolved in priority order:
/// an in-memory binary, then a file on disk, then the fetch callback.
#[derive(Default)]
pub struct ExportSources {
    pub in_memory: Option<Vec<u8>>,
    pub file: Option<PathBuf>,
    pub fetch: Option<FetchFn>,
}

impl ExportSources {
    pub fn from_memory(bytes: Vec<u8>) -> Self {
        Self {
            in_memory: Some(bytes),
            ..Default::default()
        }
    }

    pub fn from_file(path: PathBuf) -> Self {
        Self {
            file: Some(path),
            ..Default::default()
        }
    }

    pub fn from_fetch(fetch: FetchFn) -> Self {
        Self {
            fetch: Some(fetch),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.in_memory.is_none() && self.file.is_none() && self.fetch.is_none()
    }

    fn resolve(self) -> Result<Vec<u8>> {
        if let Some(bytes) = self.in_memory {
            return Ok(bytes);
        }
        if let Some(path) = self.file {
            return Ok(std::fs::read(path)?);
        }
        if let Some(fetch) = self.fetch {
            return fetch();
        }
        Err(RadViewError::NoExportSource)
    }
}

/// Resolve the binary, validate its signature, and hand it to `sink` under
/// the `.dcm`-enforced name. The sink is never invoked for an invalid or
/// missing binary, so no partial download artifact can be created.
pub fn export_with<T>(
    sources: ExportSources,
    file_name: &str,
    sink: impl FnOnce(&[u8], &str) -> Result<T>,
) -> Result<T> {
    let bytes = sources.resolve()?;
    validate_signature(&bytes)?;
    let name = ensure_dcm_extension(file_name);
    tracing::debug!(name, bytes = bytes.len(), "exporting DICOM binary");
    sink(&bytes, &name)
}

/// Export into a directory, returning the path written.
pub fn export_to_dir(sources: ExportSources, file_name: &str, dir: &Path) -> Result<PathBuf> {
    export_with(sources, file_name, |bytes, name| {
        let dest = dir.join(name);
        std::fs::write(&dest, bytes)?;
        Ok(dest)
    })
}

/// Per-viewer guard: at most one export in flight at a time. A second
/// request while one is pending is refused, not queued. The flag is part of
/// the viewer's public contract, surfaced via `is_downloading`.
#[derive(Debug, Default)]
pub struct ExportGuard {
    in_flight: bool,
}

impl ExportGuard {
    pub fn is_downloading(&self) -> bool {
        self.in_flight
    }

    pub fn begin(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(RadViewError::ExportInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Clear the guard once the attempt finishes, success or not.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}
