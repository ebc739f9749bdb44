use std::path::Path;

use image::ImageFormat;

use crate::error::Result;
use crate::raster::DisplayRaster;

/// Save a display raster as 8-bit RGBA PNG.
pub fn save_png(raster: &DisplayRaster, path: &Path) -> Result<()> {
    raster.image().save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Load a ready-made image file (PNG/JPEG preview) as a display raster.
pub fn load_raster(path: &Path) -> Result<DisplayRaster> {
    let img = image::open(path)?;
    Ok(DisplayRaster::from_image(img.to_rgba8()))
}
