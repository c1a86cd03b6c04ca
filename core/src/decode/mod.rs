//! Per-format decoders. Each takes a [`SourceFile`] and produces one or more
//! RGBA frames; dispatch is by lower-cased file extension.

mod ico;
mod pdf;
mod psd;
mod raster;
mod svg;
mod tiff;

use crate::error::ConvertError;
use crate::format::InputKind;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Decode a source file into its frames. Fails with `UnsupportedFormat`
/// before any decode attempt when the extension matches no dispatch key,
/// or `Decode` when the content itself cannot be decoded.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let ext = source
        .extension()
        .ok_or_else(|| ConvertError::UnsupportedFormat(source.name.clone()))?;
    let kind = InputKind::from_extension(&ext)
        .ok_or_else(|| ConvertError::UnsupportedFormat(ext.clone()))?;

    log::debug!("{}: decoding as {}", source.name, kind.as_str());

    let frames = match kind {
        InputKind::Raster => raster::decode(source),
        InputKind::Svg => svg::decode(source),
        InputKind::Tiff => tiff::decode(source),
        InputKind::Psd => psd::decode(source),
        InputKind::Ico => ico::decode(source),
        InputKind::Pdf => pdf::decode(source),
    }?;

    if frames.is_empty() {
        return Err(ConvertError::decode(&source.name, "produced no frames"));
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    pub(crate) fn test_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        })
    }

    pub(crate) fn encoded(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(test_image(width, height))
            .write_to(&mut out, format)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_unsupported_extension_fails_before_decode() {
        let source = SourceFile::new("video.mp4", vec![0u8; 16]);
        match decode(&source) {
            Err(ConvertError::UnsupportedFormat(ext)) => assert_eq!(ext, "mp4"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let source = SourceFile::new("noext", vec![0u8; 16]);
        assert!(matches!(
            decode(&source),
            Err(ConvertError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_png_routes_to_raster_decoder() {
        let source = SourceFile::new("a.png", encoded(ImageFormat::Png, 20, 10));
        let frames = decode(&source).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].page, 1);
        assert_eq!((frames[0].width(), frames[0].height()), (20, 10));
    }

    #[test]
    fn test_bmp_and_gif_route_to_raster_decoder() {
        for (name, format) in [("a.bmp", ImageFormat::Bmp), ("a.gif", ImageFormat::Gif)] {
            let source = SourceFile::new(name, encoded(format, 8, 8));
            let frames = decode(&source).unwrap();
            assert_eq!(frames.len(), 1);
        }
    }

    #[test]
    fn test_uppercase_extension_dispatches() {
        let source = SourceFile::new("photo.PNG", encoded(ImageFormat::Png, 4, 4));
        assert_eq!(decode(&source).unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_content_is_decode_error() {
        let source = SourceFile::new("broken.png", vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(decode(&source), Err(ConvertError::Decode { .. })));
    }
}
