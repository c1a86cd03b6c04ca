use crate::decode;
use crate::encode::{self, Quality};
use crate::error::ConvertError;
use crate::format::TargetFormat;
use crate::source::SourceFile;

/// One encoded output: bytes, MIME type, and the 1-based page index of the
/// frame it came from. Output naming is applied by the batch aggregator.
#[derive(Debug, Clone)]
pub struct ConversionArtifact {
    pub data: Vec<u8>,
    pub mime: &'static str,
    pub page: u32,
}

/// The ordered artifacts produced from one source file, in page order.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub artifacts: Vec<ConversionArtifact>,
}

impl ConversionResult {
    pub fn is_multi_page(&self) -> bool {
        self.artifacts.len() > 1
    }
}

/// Convert one source file: select the decoder by extension, decode to
/// frames, encode every frame with the same target format and quality.
/// Decoder errors propagate; nothing is caught here.
pub fn convert(
    source: &SourceFile,
    target: TargetFormat,
    quality: Quality,
) -> Result<ConversionResult, ConvertError> {
    let frames = decode::decode(source)?;

    log::debug!(
        "{}: decoded {} frame(s), encoding to {}",
        source.name,
        frames.len(),
        target.as_str()
    );

    let mut artifacts = Vec::with_capacity(frames.len());
    for frame in &frames {
        let data = encode::encode(frame, target, quality)?;
        artifacts.push(ConversionArtifact {
            data,
            mime: target.mime(),
            page: frame.page,
        });
    }

    Ok(ConversionResult { artifacts })
}
