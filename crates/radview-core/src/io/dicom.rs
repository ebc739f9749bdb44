use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::{RadViewError, Result};

/// Length of the DICOM file preamble that precedes the magic.
pub const DICOM_PREAMBLE_LEN: usize = 128;

/// Four-byte magic following the preamble.
pub const DICOM_MAGIC: &[u8; 4] = b"DICM";

/// Smallest buffer that can carry a valid signature (preamble + magic).
pub const DICOM_MIN_LEN: usize = DICOM_PREAMBLE_LEN + DICOM_MAGIC.len();

/// Check the DICOM file-meta signature: a 128-byte preamble followed by the
/// ASCII magic `DICM`. Buffers shorter than 132 bytes fail unconditionally.
pub fn validate_signature(bytes: &[u8]) -> Result<()> {
    if bytes.len() < DICOM_MIN_LEN {
        return Err(RadViewError::UnsupportedSignature(format!(
            "buffer too small for DICOM preamble: {} bytes",
            bytes.len()
        )));
    }
    if &bytes[DICOM_PREAMBLE_LEN..DICOM_MIN_LEN] != DICOM_MAGIC {
        return Err(RadViewError::UnsupportedSignature(
            "missing DICM magic after 128-byte preamble".into(),
        ));
    }
    Ok(())
}

/// Force the `.dcm` suffix on a download name, appending it when missing.
/// Empty names fall back to "image.dcm".
pub fn ensure_dcm_extension(name: &str) -> String {
    let trimmed = name.trim();
    let base = if trimmed.is_empty() { "image" } else { trimmed };
    if base.to_ascii_lowercase().ends_with(".dcm") {
        base.to_string()
    } else {
        format!("{base}.dcm")
    }
}

/// Memory-mapped DICOM binary, signature-checked on open.
pub struct DicomFile {
    mmap: Mmap,
    path: PathBuf,
}

impl DicomFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        validate_signature(&mmap)?;
        tracing::debug!(path = %path.display(), bytes = mmap.len(), "DICOM signature ok");
        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
