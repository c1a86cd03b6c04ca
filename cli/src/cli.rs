use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Batch image/document converter: raster images, SVG, TIFF, PSD, ICO, and
/// multi-page PDF in; PNG, JPEG, or WebP out
#[derive(Debug, Parser)]
#[command(name = "image_converter", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert one or more files to a target raster format
    Convert {
        /// Input file or directory
        input: PathBuf,

        /// Output directory (default: current directory)
        output: Option<PathBuf>,

        /// Target format (png, jpg, jpeg, webp, or a MIME type)
        #[arg(long, short = 't', value_name = "FORMAT", required = true)]
        to: String,

        /// Quality for JPEG/WebP (0-100); ignored for PNG
        #[arg(short, long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
        quality: u8,

        /// Process directories recursively
        #[arg(short, long)]
        recursive: bool,
    },
}
