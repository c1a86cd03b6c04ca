use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use image_converter_core::{InputKind, SourceFile};

/// Collect all convertible files from the input path. If `recursive` is
/// true, walk subdirectories.
pub fn collect_files(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        anyhow::bail!("{}: not a file or directory", input.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    for entry in WalkDir::new(input).max_depth(max_depth) {
        let entry = entry.context("failed to walk input directory")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(InputKind::from_extension)
            .is_some();
        if supported {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Read each path into an in-memory source file named after its file name.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(String::from)
                .unwrap_or_else(|| path.display().to_string());
            let data =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            Ok(SourceFile::new(name, data))
        })
        .collect()
}

/// Write file contents, creating parent directories as needed.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}
