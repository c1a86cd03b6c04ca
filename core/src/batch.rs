use std::sync::Arc;

use crate::archive::ArchiveWriter;
use crate::convert::convert;
use crate::encode::Quality;
use crate::error::ConvertError;
use crate::format::TargetFormat;
use crate::source::SourceFile;

/// Archive name for batches with more than one input file. A single
/// multi-page input gets `<base>_converted.zip` instead.
const MULTI_FILE_ARCHIVE_NAME: &str = "converted_images.zip";

/// One named output: the encoded bytes plus the file name computed from its
/// source and page index. Names are final; the presentation layer uses them
/// verbatim for downloads and archive entries.
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    pub name: String,
    pub mime: &'static str,
    pub page: u32,
    pub data: Vec<u8>,
}

/// All named artifacts produced from one source file, in page order.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub source: String,
    pub artifacts: Vec<OutputArtifact>,
}

/// How the batch output is delivered: a lone artifact directly, anything
/// more as a ZIP archive.
#[derive(Debug, Clone)]
pub enum Delivery {
    Single {
        name: String,
        mime: &'static str,
        data: Vec<u8>,
    },
    Archive {
        name: String,
        data: Vec<u8>,
    },
}

impl Delivery {
    pub fn name(&self) -> &str {
        match self {
            Delivery::Single { name, .. } | Delivery::Archive { name, .. } => name,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Delivery::Single { mime, .. } => mime,
            Delivery::Archive { .. } => "application/zip",
        }
    }

    pub fn data(&self) -> &[u8] {
        match self {
            Delivery::Single { data, .. } | Delivery::Archive { data, .. } => data,
        }
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub files: Vec<FileOutcome>,
    pub delivery: Delivery,
}

/// Borrowed view of an artifact, reported to the progress observer as soon
/// as the artifact exists, independent of final packaging.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    pub source: &'a str,
    pub name: &'a str,
    pub mime: &'static str,
    pub data: &'a [u8],
}

/// Convert every input file to the target format and package the results.
pub async fn run_batch(
    files: Vec<SourceFile>,
    target: TargetFormat,
    quality: Quality,
) -> Result<BatchOutcome, ConvertError> {
    run_batch_with_progress(files, target, quality, |_| {}).await
}

/// Like [`run_batch`], reporting each artifact to `on_artifact` as it is
/// produced.
///
/// All per-file conversions are launched together and the batch suspends
/// until every task settles; completion order never affects naming or
/// packaging. After all tasks settle, the first per-file failure in input
/// order aborts the batch as a whole, carrying the failing file's name —
/// no partial delivery is produced.
pub async fn run_batch_with_progress<F>(
    files: Vec<SourceFile>,
    target: TargetFormat,
    quality: Quality,
    on_artifact: F,
) -> Result<BatchOutcome, ConvertError>
where
    F: Fn(Preview<'_>) + Send + Sync + 'static,
{
    if files.is_empty() {
        return Err(ConvertError::InvalidArgument("no input files".into()));
    }

    let single_base = (files.len() == 1).then(|| files[0].base_name());
    let on_artifact = Arc::new(on_artifact);

    log::info!(
        "converting {} file(s) to {}",
        files.len(),
        target.as_str()
    );

    // One blocking task per file: decoders (pdfium in particular) and the
    // encoders are synchronous, and each task owns its own raster buffers.
    let mut handles = Vec::with_capacity(files.len());
    for file in files {
        let cb = Arc::clone(&on_artifact);
        let name = file.name.clone();
        let handle =
            tokio::task::spawn_blocking(move || convert_and_name(file, target, quality, &*cb));
        handles.push((name, handle));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    let mut first_failure: Option<(String, ConvertError)> = None;
    for (name, handle) in handles {
        let result = match handle.await {
            Ok(r) => r,
            Err(e) => Err(ConvertError::decode(
                &name,
                format!("conversion task failed: {e}"),
            )),
        };
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                log::error!("error converting file {name}: {e}");
                if first_failure.is_none() {
                    first_failure = Some((name, e));
                }
            }
        }
    }

    if let Some((name, source)) = first_failure {
        return Err(ConvertError::File {
            name,
            source: Box::new(source),
        });
    }

    let delivery = package(&outcomes, single_base)?;
    Ok(BatchOutcome {
        files: outcomes,
        delivery,
    })
}

fn convert_and_name(
    file: SourceFile,
    target: TargetFormat,
    quality: Quality,
    on_artifact: &(dyn Fn(Preview<'_>) + Send + Sync),
) -> Result<FileOutcome, ConvertError> {
    let base = file.base_name();
    let result = convert(&file, target, quality)?;
    let multi_page = result.is_multi_page();

    let artifacts: Vec<OutputArtifact> = result
        .artifacts
        .into_iter()
        .map(|a| OutputArtifact {
            name: output_name(&base, a.page, multi_page, target),
            mime: a.mime,
            page: a.page,
            data: a.data,
        })
        .collect();

    for artifact in &artifacts {
        on_artifact(Preview {
            source: &file.name,
            name: &artifact.name,
            mime: artifact.mime,
            data: &artifact.data,
        });
    }

    Ok(FileOutcome {
        source: file.name,
        artifacts,
    })
}

/// `<base>.<ext>` for single-artifact files, `<base>_page<N>.<ext>` when the
/// source produced several pages.
fn output_name(base: &str, page: u32, multi_page: bool, target: TargetFormat) -> String {
    if multi_page {
        format!("{base}_page{page}.{}", target.extension())
    } else {
        format!("{base}.{}", target.extension())
    }
}

fn package(
    files: &[FileOutcome],
    single_base: Option<String>,
) -> Result<Delivery, ConvertError> {
    let total: usize = files.iter().map(|f| f.artifacts.len()).sum();

    if total == 1 {
        let artifact = files
            .iter()
            .flat_map(|f| f.artifacts.iter())
            .next()
            .ok_or_else(|| ConvertError::Packaging("batch produced no artifacts".into()))?;
        return Ok(Delivery::Single {
            name: artifact.name.clone(),
            mime: artifact.mime,
            data: artifact.data.clone(),
        });
    }

    let mut writer = ArchiveWriter::new();
    for file in files {
        for artifact in &file.artifacts {
            writer.add_entry(&artifact.name, &artifact.data)?;
        }
    }

    let name = match single_base {
        Some(base) => format!("{base}_converted.zip"),
        None => MULTI_FILE_ARCHIVE_NAME.to_string(),
    };

    Ok(Delivery::Archive {
        name,
        data: writer.finish()?,
    })
}
