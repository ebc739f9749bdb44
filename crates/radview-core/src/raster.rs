use image::RgbaImage;

/// An owned, fully opaque 8-bit RGBA raster ready for display.
///
/// Produced by the windowing decoder (or loaded from an already rendered
/// image file) and treated as immutable from then on: a viewer replaces its
/// raster wholesale when the source frame changes.
#[derive(Clone, Debug)]
pub struct DisplayRaster {
    image: RgbaImage,
}

impl DisplayRaster {
    pub(crate) fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn natural_width(&self) -> u32 {
        self.image.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color-inverted copy for display. The source raster is left untouched;
    /// alpha stays fully opaque.
    pub fn inverted(&self) -> Self {
        let mut image = self.image.clone();
        for px in image.pixels_mut() {
            px.0[0] = 255 - px.0[0];
            px.0[1] = 255 - px.0[1];
            px.0[2] = 255 - px.0[2];
        }
        Self { image }
    }
}
