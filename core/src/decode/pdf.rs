use pdfium_render::prelude::*;

use crate::error::ConvertError;
use crate::frame::DecodedFrame;
use crate::source::SourceFile;

/// Render every page of a PDF to a frame, in page order, at scale 1.0
/// (PDF user-space units map 1:1 to pixels).
///
/// pdfium is not async-safe; callers run this inside `spawn_blocking`.
/// The binding is re-established per call, so concurrent per-file tasks never
/// share a pdfium instance.
pub fn decode(source: &SourceFile) -> Result<Vec<DecodedFrame>, ConvertError> {
    let bindings = Pdfium::bind_to_system_library()
        .map_err(|e| ConvertError::decode(&source.name, format!("pdfium unavailable: {e}")))?;
    let pdfium = Pdfium::new(bindings);

    let document = pdfium
        .load_pdf_from_byte_slice(&source.data, None)
        .map_err(|e| ConvertError::decode(&source.name, e))?;

    let config = PdfRenderConfig::new().scale_page_by_factor(1.0);

    let mut frames = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let rendered = page
            .render_with_config(&config)
            .map_err(|e| {
                ConvertError::decode(&source.name, format!("page {}: {e}", index + 1))
            })?
            .as_image();
        frames.push(DecodedFrame::new(rendered.to_rgba8(), index as u32 + 1));
    }

    log::debug!("{}: rendered {} PDF page(s)", source.name, frames.len());

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Real page rendering needs the native pdfium library at runtime, so only
    // the failure path is exercised here.
    #[test]
    fn test_garbage_pdf_is_decode_error() {
        let source = SourceFile::new("doc.pdf", b"not a pdf at all".to_vec());
        assert!(matches!(
            decode(&source),
            Err(ConvertError::Decode { .. })
        ));
    }
}
