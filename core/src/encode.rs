use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::ConvertError;
use crate::format::TargetFormat;
use crate::frame::DecodedFrame;

/// Encoding quality in `0.0..=1.0`. Applied to JPEG and WebP; PNG ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    pub fn new(value: f32) -> Result<Self, ConvertError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConvertError::InvalidArgument(format!(
                "quality must be within 0.0..=1.0, got {value}"
            )))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Quality on the 0-100 scale the underlying encoders use.
    fn percent(&self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(0.8)
    }
}

/// Encode one frame into the target format. Encoding a valid in-memory frame
/// is expected to succeed; underlying encoder faults propagate as `Encode`.
pub fn encode(
    frame: &DecodedFrame,
    target: TargetFormat,
    quality: Quality,
) -> Result<Vec<u8>, ConvertError> {
    let output = match target {
        TargetFormat::Png => encode_png(frame)?,
        TargetFormat::Jpeg => encode_jpeg(frame, quality)?,
        TargetFormat::Webp => encode_webp(frame, quality)?,
    };

    log::debug!(
        "encoded {}x{} frame (page {}) to {}: {} bytes",
        frame.width(),
        frame.height(),
        frame.page,
        target.as_str(),
        output.len()
    );

    Ok(output)
}

fn encode_png(frame: &DecodedFrame) -> Result<Vec<u8>, ConvertError> {
    let mut output = Vec::new();
    PngEncoder::new(Cursor::new(&mut output))
        .write_image(
            frame.image.as_raw(),
            frame.width(),
            frame.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ConvertError::Encode(format!("PNG: {e}")))?;
    Ok(output)
}

fn encode_jpeg(frame: &DecodedFrame, quality: Quality) -> Result<Vec<u8>, ConvertError> {
    // JPEG has no alpha channel
    let rgb = image::DynamicImage::ImageRgba8(frame.image.clone()).to_rgb8();

    let mut output = Vec::new();
    let q = (quality.percent().round() as u8).clamp(1, 100);
    JpegEncoder::new_with_quality(Cursor::new(&mut output), q)
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ConvertError::Encode(format!("JPEG: {e}")))?;
    Ok(output)
}

fn encode_webp(frame: &DecodedFrame, quality: Quality) -> Result<Vec<u8>, ConvertError> {
    let encoder = webp::Encoder::from_rgba(frame.image.as_raw(), frame.width(), frame.height());
    Ok(encoder.encode(quality.percent()).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn gradient_frame() -> DecodedFrame {
        let image = RgbaImage::from_fn(64, 64, |x, y| {
            image::Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255])
        });
        DecodedFrame::single(image)
    }

    #[test]
    fn test_quality_range_enforced() {
        assert!(Quality::new(0.0).is_ok());
        assert!(Quality::new(1.0).is_ok());
        assert!(matches!(
            Quality::new(1.5),
            Err(ConvertError::InvalidArgument(_))
        ));
        assert!(matches!(
            Quality::new(-0.1),
            Err(ConvertError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_jpeg_quality_changes_output() {
        let frame = gradient_frame();
        let high = encode(&frame, TargetFormat::Jpeg, Quality::new(0.9).unwrap()).unwrap();
        let low = encode(&frame, TargetFormat::Jpeg, Quality::new(0.2).unwrap()).unwrap();
        assert_ne!(high, low);
    }

    #[test]
    fn test_png_ignores_quality() {
        let frame = gradient_frame();
        let a = encode(&frame, TargetFormat::Png, Quality::new(0.9).unwrap()).unwrap();
        let b = encode(&frame, TargetFormat::Png, Quality::new(0.2).unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[1..4], b"PNG");
    }

    #[test]
    fn test_webp_output_is_riff() {
        let frame = gradient_frame();
        let out = encode(&frame, TargetFormat::Webp, Quality::default()).unwrap();
        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(&out[8..12], b"WEBP");
    }

    #[test]
    fn test_jpeg_roundtrips_to_same_dimensions() {
        let frame = gradient_frame();
        let out = encode(&frame, TargetFormat::Jpeg, Quality::default()).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 64);
    }
}
