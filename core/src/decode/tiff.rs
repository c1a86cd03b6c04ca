use std::io::Cursor;

use image::codecs::tiff::TiffDecoder;
use image::DynamicImage;

use crate::error::ConvertError;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Decode a TIFF. Only the first embedded sub-image is taken; later IFDs
/// are ignored.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let decoder = TiffDecoder::new(Cursor::new(source.data.as_slice()))
        .map_err(|e| ConvertError::decode(&source.name, e))?;
    let img = DynamicImage::from_decoder(decoder)
        .map_err(|e| ConvertError::decode(&source.name, e))?;
    Ok(vec![DecodedFrame::single(img.to_rgba8())])
}
