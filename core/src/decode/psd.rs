use image::RgbaImage;

use crate::error::ConvertError;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Decode a Photoshop document. Only the flattened composite is used;
/// individual layers are not exposed.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let psd = psd::Psd::from_bytes(&source.data)
        .map_err(|e| ConvertError::decode(&source.name, e))?;

    let (width, height) = (psd.width(), psd.height());
    let image = RgbaImage::from_raw(width, height, psd.rgba()).ok_or_else(|| {
        ConvertError::decode(&source.name, "composite pixel data has unexpected length")
    })?;

    Ok(vec![DecodedFrame::single(image)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_psd_is_decode_error() {
        let source = SourceFile::new("art.psd", vec![0u8; 32]);
        assert!(matches!(
            decode(&source),
            Err(ConvertError::Decode { .. })
        ));
    }
}
