//! External-tool command groups.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api::{self, ResizeOptions};
use crate::domain::AppError;
use crate::domain::tools::{
    DEFAULT_IMAGE_QUALITY, DEFAULT_IMAGE_SIZE, DEFAULT_PDF_DPI, DEFAULT_SCENE_THRESHOLD,
};

#[derive(Subcommand)]
pub enum AudioCommands {
    /// Convert an MP3 file to M4A
    #[clap(visible_alias = "toipod")]
    ToM4a {
        /// Input MP3 file
        input: PathBuf,
        /// Output M4A file (defaults to the input with .m4a)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show duration and format of a media file
    Info {
        /// Input media file
        input: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum VideoCommands {
    /// Transcode AVCHD streams to MP4
    ExtractAvchd {
        /// AVCHD container folder (contains BDMV/STREAM)
        container: PathBuf,
        /// Output folder (defaults to the container folder)
        output: Option<PathBuf>,
    },
    /// Extract the audio track as MP3
    ExtractAudioAsMp3 {
        /// Input video file
        input: PathBuf,
        /// Output MP3 file
        output: PathBuf,
    },
    /// Split a video at scene changes
    ExtractScenes {
        /// Input video file
        input: PathBuf,
        /// Output folder for scene files
        output_dir: PathBuf,
        /// Scene change sensitivity between 0 and 1
        #[arg(short, long, default_value_t = DEFAULT_SCENE_THRESHOLD)]
        threshold: f64,
    },
}

#[derive(Subcommand)]
pub enum PdfCommands {
    /// Compress a PDF with ghostscript
    Compress {
        /// Input PDF file
        input: PathBuf,
        /// Output PDF file (defaults to <name>_compressed.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Image resolution in DPI
        #[arg(long, default_value_t = DEFAULT_PDF_DPI)]
        dpi: u32,
    },
}

#[derive(Subcommand)]
pub enum ImageCommands {
    /// Downscale images so the longer edge fits the given size
    Resize {
        /// Folder with source images
        input_dir: PathBuf,
        /// Folder for resized images
        output_dir: PathBuf,
        /// File extensions to process (repeatable)
        #[arg(short = 'f', long = "format")]
        formats: Vec<String>,
        /// Maximum edge length in pixels
        #[arg(short, long, default_value_t = DEFAULT_IMAGE_SIZE)]
        size: u32,
        /// Output quality (0-95)
        #[arg(short, long, default_value_t = DEFAULT_IMAGE_QUALITY)]
        quality: u8,
        /// Show what would be resized without writing files
        #[arg(short = 'd', long = "dry")]
        dry: bool,
    },
}

#[derive(Subcommand)]
pub enum UrlCommands {
    /// Print an openforklift:// link for a path
    ForkliftLink {
        /// File path
        path: String,
    },
}

pub fn run_audio(command: AudioCommands) -> Result<(), AppError> {
    match command {
        AudioCommands::ToM4a { input, output } => {
            let written = api::audio_to_m4a(&input, output.as_deref())?;
            println!("✅ Converted {} to {}", input.display(), written.display());
        }
        AudioCommands::Info { input } => {
            let info = api::audio_info(&input)?;
            println!("{}", info.summary());
        }
    }
    Ok(())
}

pub fn run_video(command: VideoCommands) -> Result<(), AppError> {
    match command {
        VideoCommands::ExtractAvchd { container, output } => {
            super::finish_batch(api::extract_avchd(&container, output.as_deref())?)
        }
        VideoCommands::ExtractAudioAsMp3 { input, output } => {
            api::extract_audio_as_mp3(&input, &output)?;
            println!("✅ Extracted audio to {}", output.display());
            Ok(())
        }
        VideoCommands::ExtractScenes { input, output_dir, threshold } => {
            super::finish_batch(api::extract_scenes(&input, &output_dir, Some(threshold))?)
        }
    }
}

pub fn run_pdf(command: PdfCommands) -> Result<(), AppError> {
    match command {
        PdfCommands::Compress { input, output, dpi } => {
            let written = api::compress_pdf(&input, output.as_deref(), Some(dpi))?;
            println!("✅ Compressed PDF written to {}", written.display());
            Ok(())
        }
    }
}

pub fn run_image(command: ImageCommands) -> Result<(), AppError> {
    match command {
        ImageCommands::Resize { input_dir, output_dir, formats, size, quality, dry } => {
            let mut options =
                ResizeOptions { max_size: size, quality, dry_run: dry, ..Default::default() };
            if !formats.is_empty() {
                options.formats = formats;
            }
            let report = api::resize_images(&input_dir, &output_dir, &options)?;
            if report.is_empty() {
                println!("No matching images in {}", input_dir.display());
            }
            super::finish_batch(report)
        }
    }
}

pub fn run_url(command: UrlCommands) -> Result<(), AppError> {
    match command {
        UrlCommands::ForkliftLink { path } => println!("{}", api::forklift_link(&path)),
    }
    Ok(())
}
