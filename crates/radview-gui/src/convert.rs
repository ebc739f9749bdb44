use radview_core::raster::DisplayRaster;

/// Convert a display raster (8-bit RGBA) to an egui ColorImage.
pub fn raster_to_color_image(raster: &DisplayRaster) -> egui::ColorImage {
    let size = [
        raster.natural_width() as usize,
        raster.natural_height() as usize,
    ];
    egui::ColorImage::from_rgba_unmultiplied(size, raster.image().as_raw())
}
