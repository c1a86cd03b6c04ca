use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ConvertError;

/// In-memory ZIP builder for multi-artifact deliveries.
pub struct ArchiveWriter {
    inner: ZipWriter<Cursor<Vec<u8>>>,
}

impl ArchiveWriter {
    pub fn new() -> Self {
        Self {
            inner: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    pub fn add_entry(&mut self, name: &str, data: &[u8]) -> Result<(), ConvertError> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.inner
            .start_file(name, options)
            .map_err(|e| ConvertError::Packaging(format!("entry {name}: {e}")))?;
        self.inner
            .write_all(data)
            .map_err(|e| ConvertError::Packaging(format!("entry {name}: {e}")))?;
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<u8>, ConvertError> {
        let cursor = self
            .inner
            .finish()
            .map_err(|e| ConvertError::Packaging(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}
