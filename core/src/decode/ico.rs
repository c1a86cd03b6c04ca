use std::io::Cursor;

use image::RgbaImage;

use crate::error::ConvertError;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Decode an ICO container. When several icon sizes are embedded, the entry
/// with the largest width is selected; on ties the first such entry wins.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let dir = ico::IconDir::read(Cursor::new(source.data.as_slice()))
        .map_err(|e| ConvertError::decode(&source.name, e))?;

    let best = dir
        .entries()
        .iter()
        .reduce(|best, entry| if entry.width() > best.width() { entry } else { best })
        .ok_or_else(|| ConvertError::decode(&source.name, "no icon entries"))?;

    let icon = best
        .decode()
        .map_err(|e| ConvertError::decode(&source.name, e))?;

    let (width, height) = (icon.width(), icon.height());
    let image = RgbaImage::from_raw(width, height, icon.rgba_data().to_vec()).ok_or_else(
        || ConvertError::decode(&source.name, "icon pixel data has unexpected length"),
    )?;

    Ok(vec![DecodedFrame::single(image)])
}
