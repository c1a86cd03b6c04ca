use image::RgbaImage;

use crate::error::ConvertError;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Rasterize an SVG at its intrinsic document size.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let tree = usvg::Tree::from_data(&source.data, &usvg::Options::default())
        .map_err(|e| ConvertError::decode(&source.name, e))?;

    let size = tree.size();
    let width = (size.width().ceil() as u32).max(1);
    let height = (size.height().ceil() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        ConvertError::decode(&source.name, format!("invalid raster size {width}x{height}"))
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; frames carry straight RGBA
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ConvertError::decode(&source.name, "pixmap size mismatch"))?;

    Ok(vec![DecodedFrame::single(image)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_renders_at_document_size() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="30">
            <rect x="0" y="0" width="40" height="30" fill="#ff0000"/>
        </svg>"##;
        let source = SourceFile::new("box.svg", svg.as_bytes().to_vec());
        let frames = decode(&source).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!((frames[0].width(), frames[0].height()), (40, 30));
        // Center pixel is the filled rectangle
        let p = frames[0].image.get_pixel(20, 15);
        assert_eq!(p.0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_invalid_svg_is_decode_error() {
        let source = SourceFile::new("bad.svg", b"<not-svg>".to_vec());
        assert!(matches!(
            decode(&source),
            Err(ConvertError::Decode { .. })
        ));
    }
}
