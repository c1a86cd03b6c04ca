//! Core conversion logic for the batch image/document converter.
//!
//! Accepts raw file bytes (raster images, SVG, TIFF, PSD, ICO, or multi-page
//! PDF), decodes each into RGBA frames, re-encodes into PNG/JPEG/WebP at a
//! configurable quality, and packages the results: one output becomes a single
//! downloadable blob, several become a ZIP archive.

pub mod archive;
pub mod batch;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod frame;
pub mod source;

pub use batch::{
    run_batch, run_batch_with_progress, BatchOutcome, Delivery, FileOutcome, OutputArtifact,
    Preview,
};
pub use convert::{convert, ConversionArtifact, ConversionResult};
pub use encode::Quality;
pub use error::ConvertError;
pub use format::{InputKind, TargetFormat};
pub use frame::DecodedFrame;
pub use source::SourceFile;
