use std::fs::File;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RadViewError, Result};
use crate::frame::{RawFrame, Rescale, VoiWindow};
use crate::overlay::Marker;

/// Sidecar describing a decoded radiograph frame: dimensions and windowing
/// attributes extracted by the external DICOM parser, plus the path to its
/// raw little-endian sample dump and any detection markers.
///
/// Window attributes default to center 128 / width 256 when the source
/// carried none.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameManifest {
    pub width: usize,
    pub height: usize,
    /// Source bit depth (8 or 16). Dumps use 1 byte per sample up to 8 bits,
    /// 2 bytes (little-endian) above.
    pub bit_depth: u8,
    /// Sample dump path, relative to the manifest file.
    pub data: PathBuf,
    /// Original `.dcm` binary, kept next to the dump for export.
    pub source_dicom: Option<PathBuf>,
    pub study: Option<String>,
    pub weld_id: Option<String>,
    #[serde(default)]
    pub rescale: Rescale,
    #[serde(default)]
    pub window: VoiWindow,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl FrameManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest: Self =
            toml::from_str(&content).map_err(|e| RadViewError::Manifest(e.to_string()))?;
        debug!(
            path = %path.display(),
            width = manifest.width,
            height = manifest.height,
            markers = manifest.markers.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RadViewError::Manifest(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Bytes per stored sample in the dump.
    pub fn bytes_per_sample(&self) -> usize {
        if self.bit_depth <= 8 {
            1
        } else {
            2
        }
    }

    /// Dump path resolved against the manifest's directory.
    pub fn data_path(&self, manifest_path: &Path) -> PathBuf {
        match manifest_path.parent() {
            Some(dir) => dir.join(&self.data),
            None => self.data.clone(),
        }
    }

    /// Source `.dcm` path resolved against the manifest's directory.
    pub fn source_dicom_path(&self, manifest_path: &Path) -> Option<PathBuf> {
        let source = self.source_dicom.as_ref()?;
        Some(match manifest_path.parent() {
            Some(dir) => dir.join(source),
            None => source.clone(),
        })
    }

    /// Memory-map the sample dump and decode it into a `RawFrame` carrying
    /// this manifest's rescale and window attributes.
    pub fn load_frame(&self, manifest_path: &Path) -> Result<RawFrame> {
        let dump_path = self.data_path(manifest_path);
        let file = File::open(&dump_path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let pixels = self
            .width
            .checked_mul(self.height)
            .ok_or_else(|| RadViewError::MalformedFrame("dimensions overflow".into()))?;
        let expected = pixels * self.bytes_per_sample();
        if mmap.len() != expected {
            return Err(RadViewError::MalformedFrame(format!(
                "sample dump is {} bytes, expected {expected} for {}x{} at {} bit",
                mmap.len(),
                self.width,
                self.height,
                self.bit_depth
            )));
        }

        let mut samples = vec![0u16; pixels];
        if self.bytes_per_sample() == 2 {
            let mut cursor = std::io::Cursor::new(&mmap[..]);
            cursor.read_u16_into::<LittleEndian>(&mut samples)?;
        } else {
            for (dst, src) in samples.iter_mut().zip(mmap.iter()) {
                *dst = *src as u16;
            }
        }

        let mut frame = RawFrame::from_samples(samples, self.width, self.height, self.bit_depth)?;
        frame.rescale = self.rescale;
        frame.window = self.window;
        Ok(frame)
    }
}
