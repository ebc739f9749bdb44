use ndarray::Array2;

use crate::consts::{DEFAULT_WINDOW_CENTER, DEFAULT_WINDOW_WIDTH};
use crate::error::{RadViewError, Result};

/// Linear transform converting stored sample values to modality units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rescale {
    pub slope: f32,
    pub intercept: f32,
}

impl Default for Rescale {
    fn default() -> Self {
        Self {
            slope: 1.0,
            intercept: 0.0,
        }
    }
}

/// VOI window (center/width pair) selecting the visible intensity band.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VoiWindow {
    pub center: f32,
    pub width: f32,
}

impl Default for VoiWindow {
    fn default() -> Self {
        Self {
            center: DEFAULT_WINDOW_CENTER,
            width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

/// A single decoded radiograph frame, prior to display windowing.
/// Sample values are stored as u16 regardless of source depth;
/// `bit_depth` records the original depth (8 or 16).
#[derive(Clone, Debug)]
pub struct RawFrame {
    /// Sample data, row-major, shape = (height, width)
    pub samples: Array2<u16>,
    /// Original bit depth before conversion (8 or 16)
    pub bit_depth: u8,
    pub rescale: Rescale,
    pub window: VoiWindow,
}

impl RawFrame {
    pub fn new(samples: Array2<u16>, bit_depth: u8) -> Self {
        Self {
            samples,
            bit_depth,
            rescale: Rescale::default(),
            window: VoiWindow::default(),
        }
    }

    /// Build a frame from a flat sample buffer, validating dimensions.
    pub fn from_samples(
        samples: Vec<u16>,
        width: usize,
        height: usize,
        bit_depth: u8,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RadViewError::MalformedFrame(format!(
                "invalid dimensions {width}x{height}"
            )));
        }
        if samples.len() != width * height {
            return Err(RadViewError::MalformedFrame(format!(
                "sample count {} does not match {width}x{height}",
                samples.len()
            )));
        }
        let samples = Array2::from_shape_vec((height, width), samples)
            .map_err(|e| RadViewError::MalformedFrame(e.to_string()))?;
        Ok(Self::new(samples, bit_depth))
    }

    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    pub fn height(&self) -> usize {
        self.samples.nrows()
    }
}
