use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to build archive: {0}")]
    Packaging(String),

    /// Batch-level wrapper carrying the name of the file that failed.
    #[error("error converting file {name}: {source}")]
    File {
        name: String,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub(crate) fn decode(name: &str, reason: impl std::fmt::Display) -> Self {
        ConvertError::Decode {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
