use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use image_converter_core::{run_batch_with_progress, Preview, Quality, TargetFormat};

mod cli;
mod io;
mod report;

use cli::{Cli, Command};
use io::{collect_files, read_sources, write_file};
use report::Report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match &cli.command {
        Command::Convert {
            input,
            output,
            to,
            quality,
            recursive,
        } => handle_convert(input, output.as_deref(), to, *quality, *recursive).await,
    }
}

async fn handle_convert(
    input: &Path,
    output: Option<&Path>,
    target_format_str: &str,
    quality_pct: u8,
    recursive: bool,
) -> Result<()> {
    let target = TargetFormat::from_str(target_format_str).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid target format: {}. Use: png, jpg, jpeg, webp",
            target_format_str
        )
    })?;
    let quality = Quality::new(f32::from(quality_pct) / 100.0)?;

    let files = collect_files(input, recursive).context("Failed to collect input files")?;

    if files.is_empty() {
        println!("No supported files found.");
        return Ok(());
    }

    println!("Converting {} file(s) to {}...", files.len(), target.as_str());

    let sources = read_sources(&files)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let pb_artifacts = pb.clone();
    let outcome = run_batch_with_progress(sources, target, quality, move |preview: Preview<'_>| {
        pb_artifacts.set_message(format!("{} → {}", preview.source, preview.name));
    })
    .await;

    let outcome = match outcome {
        Ok(o) => {
            pb.finish_with_message("Done!");
            o
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    let out_dir = output.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let out_path = out_dir.join(outcome.delivery.name());
    write_file(&out_path, outcome.delivery.data())?;

    Report::from_outcome(&outcome).print_summary(&outcome.delivery);

    Ok(())
}
