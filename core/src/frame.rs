use image::RgbaImage;

/// One decoded raster frame. Single-image sources always produce page 1;
/// multi-page sources produce pages 1..N in document order.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub image: RgbaImage,
    pub page: u32,
}

impl DecodedFrame {
    pub fn new(image: RgbaImage, page: u32) -> Self {
        Self { image, page }
    }

    /// A frame from a single-image source.
    pub fn single(image: RgbaImage) -> Self {
        Self { image, page: 1 }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
