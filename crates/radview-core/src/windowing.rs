use image::RgbaImage;
use ndarray::ArrayView1;
use rayon::prelude::*;

use crate::consts::{MIN_VALID_WINDOW_WIDTH, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{RadViewError, Result};
use crate::frame::{RawFrame, Rescale, VoiWindow};
use crate::raster::DisplayRaster;

/// Map one stored sample to its 8-bit display intensity.
///
/// Applies the modality rescale, then the standard DICOM grayscale display
/// function for a center/width window. Channel values truncate toward zero
/// after clamping to [0, 255].
fn window_sample(sample: u16, rescale: Rescale, window: VoiWindow) -> u8 {
    let modality = sample as f32 * rescale.slope + rescale.intercept;
    let g = ((modality - (window.center - 0.5)) / (window.width - 1.0) + 0.5) * 255.0;
    g.clamp(0.0, 255.0) as u8
}

fn fill_row(row: ArrayView1<'_, u16>, out: &mut [u8], rescale: Rescale, window: VoiWindow) {
    for (sample, px) in row.iter().zip(out.chunks_exact_mut(4)) {
        let g = window_sample(*sample, rescale, window);
        px[0] = g;
        px[1] = g;
        px[2] = g;
        px[3] = 255;
    }
}

/// Render a raw frame to a display raster using its stored VOI window.
pub fn decode(frame: &RawFrame) -> Result<DisplayRaster> {
    decode_with(frame, frame.window)
}

/// Render a raw frame with a caller-supplied window, leaving the frame's
/// stored window untouched. Fails on window widths <= 1 and on empty frames;
/// no raster is produced on failure.
pub fn decode_with(frame: &RawFrame, window: VoiWindow) -> Result<DisplayRaster> {
    if !(window.width > MIN_VALID_WINDOW_WIDTH) {
        return Err(RadViewError::MalformedFrame(format!(
            "window width {} must be greater than {MIN_VALID_WINDOW_WIDTH}",
            window.width
        )));
    }

    let h = frame.height();
    let w = frame.width();
    if h == 0 || w == 0 {
        return Err(RadViewError::MalformedFrame(format!(
            "invalid dimensions {w}x{h}"
        )));
    }

    let rescale = frame.rescale;
    let mut pixels = vec![0u8; h * w * 4];

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_chunks_exact_mut(w * 4)
            .enumerate()
            .for_each(|(r, out)| fill_row(frame.samples.row(r), out, rescale, window));
    } else {
        for (r, out) in pixels.chunks_exact_mut(w * 4).enumerate() {
            fill_row(frame.samples.row(r), out, rescale, window);
        }
    }

    let image = RgbaImage::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    Ok(DisplayRaster::from_image(image))
}
