/// Closed set of recognized input kinds. Dispatch is a table edit, not a
/// control-flow change: adding a format means adding a variant and a row in
/// `from_extension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Formats the `image` crate loads directly (PNG, JPEG, WebP, GIF, BMP).
    Raster,
    Svg,
    Tiff,
    Psd,
    Ico,
    Pdf,
}

impl InputKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "webp" | "gif" | "bmp" => Some(InputKind::Raster),
            "svg" => Some(InputKind::Svg),
            "tiff" | "tif" => Some(InputKind::Tiff),
            "psd" => Some(InputKind::Psd),
            "ico" => Some(InputKind::Ico),
            "pdf" => Some(InputKind::Pdf),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Raster => "raster image",
            InputKind::Svg => "SVG",
            InputKind::Tiff => "TIFF",
            InputKind::Psd => "PSD",
            InputKind::Ico => "ICO",
            InputKind::Pdf => "PDF",
        }
    }
}

/// Target formats for re-encoding. Input-only formats (GIF, BMP, SVG, TIFF,
/// PSD, ICO, PDF) are never valid here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Png,
    Jpeg,
    Webp,
}

impl TargetFormat {
    /// Accepts plain names ("png", "jpg") and MIME strings ("image/png").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" | "image/png" => Some(TargetFormat::Png),
            "jpg" | "jpeg" | "image/jpeg" => Some(TargetFormat::Jpeg),
            "webp" | "image/webp" => Some(TargetFormat::Webp),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Jpeg => "jpeg",
            TargetFormat::Webp => "webp",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            TargetFormat::Png => "image/png",
            TargetFormat::Jpeg => "image/jpeg",
            TargetFormat::Webp => "image/webp",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Webp => "WebP",
        }
    }

    /// Quality only applies to lossy targets; PNG ignores it.
    pub fn is_lossy(&self) -> bool {
        matches!(self, TargetFormat::Jpeg | TargetFormat::Webp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table_covers_supported_extensions() {
        for ext in ["png", "jpg", "jpeg", "webp", "gif", "bmp"] {
            assert_eq!(InputKind::from_extension(ext), Some(InputKind::Raster));
        }
        assert_eq!(InputKind::from_extension("svg"), Some(InputKind::Svg));
        assert_eq!(InputKind::from_extension("tiff"), Some(InputKind::Tiff));
        assert_eq!(InputKind::from_extension("tif"), Some(InputKind::Tiff));
        assert_eq!(InputKind::from_extension("psd"), Some(InputKind::Psd));
        assert_eq!(InputKind::from_extension("ico"), Some(InputKind::Ico));
        assert_eq!(InputKind::from_extension("pdf"), Some(InputKind::Pdf));
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        assert_eq!(InputKind::from_extension("PNG"), Some(InputKind::Raster));
        assert_eq!(InputKind::from_extension("Tif"), Some(InputKind::Tiff));
    }

    #[test]
    fn test_unknown_extensions_are_rejected() {
        assert_eq!(InputKind::from_extension("exe"), None);
        assert_eq!(InputKind::from_extension("mp4"), None);
        assert_eq!(InputKind::from_extension(""), None);
    }

    #[test]
    fn test_target_format_from_name_and_mime() {
        assert_eq!(TargetFormat::from_str("png"), Some(TargetFormat::Png));
        assert_eq!(TargetFormat::from_str("image/png"), Some(TargetFormat::Png));
        assert_eq!(TargetFormat::from_str("jpg"), Some(TargetFormat::Jpeg));
        assert_eq!(TargetFormat::from_str("image/jpeg"), Some(TargetFormat::Jpeg));
        assert_eq!(TargetFormat::from_str("WEBP"), Some(TargetFormat::Webp));
        // Input-only formats are never valid targets
        assert_eq!(TargetFormat::from_str("gif"), None);
        assert_eq!(TargetFormat::from_str("pdf"), None);
    }

    #[test]
    fn test_jpeg_output_extension_is_jpeg() {
        assert_eq!(TargetFormat::Jpeg.extension(), "jpeg");
    }
}
