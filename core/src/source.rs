use std::path::Path;

/// One input file: a name (used for extension dispatch and output naming)
/// plus raw byte content. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Lower-cased final extension, used as the decoder dispatch key.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    /// File name with its final extension stripped. A name without an
    /// extension is returned whole.
    pub fn base_name(&self) -> String {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        let file = SourceFile::new("photo.PNG", Vec::new());
        assert_eq!(file.extension().as_deref(), Some("png"));
    }

    #[test]
    fn test_extension_missing() {
        let file = SourceFile::new("noext", Vec::new());
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn test_base_name_strips_final_extension_only() {
        assert_eq!(SourceFile::new("report.pdf", Vec::new()).base_name(), "report");
        assert_eq!(
            SourceFile::new("archive.tar.gz", Vec::new()).base_name(),
            "archive.tar"
        );
    }

    #[test]
    fn test_base_name_without_extension_is_whole_name() {
        assert_eq!(SourceFile::new("noext", Vec::new()).base_name(), "noext");
    }
}
