use crate::error::ConvertError;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Decode formats the `image` crate handles directly (PNG, JPEG, WebP, GIF,
/// BMP). Animated GIFs keep only their first frame.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let img = image::load_from_memory(&source.data)
        .map_err(|e| ConvertError::decode(&source.name, e))?;
    Ok(vec![DecodedFrame::single(img.to_rgba8())])
}
