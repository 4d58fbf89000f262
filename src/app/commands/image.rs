//! Bulk image downscaling.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::tools::{
    DEFAULT_IMAGE_QUALITY, DEFAULT_IMAGE_SIZE, FFMPEG, MAX_IMAGE_QUALITY, has_image_format,
    image_resize_args,
};
use crate::domain::{AppError, BatchReport};
use crate::ports::ToolRunner;

pub const DEFAULT_IMAGE_FORMATS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOptions {
    pub formats: Vec<String>,
    /// Upper bound for the longer edge, in pixels.
    pub max_size: u32,
    pub quality: u8,
    pub dry_run: bool,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            formats: DEFAULT_IMAGE_FORMATS.iter().map(|f| f.to_string()).collect(),
            max_size: DEFAULT_IMAGE_SIZE,
            quality: DEFAULT_IMAGE_QUALITY,
            dry_run: false,
        }
    }
}

/// Downscale matching images from `input_dir` into `output_dir`, keeping names.
pub fn resize(
    runner: &impl ToolRunner,
    input_dir: &Path,
    output_dir: &Path,
    options: &ResizeOptions,
) -> Result<BatchReport, AppError> {
    if options.quality > MAX_IMAGE_QUALITY {
        return Err(AppError::Validation(format!(
            "Quality must be between 0 and {}, got {}",
            MAX_IMAGE_QUALITY, options.quality
        )));
    }
    if options.max_size == 0 {
        return Err(AppError::Validation("Size must be positive".to_string()));
    }
    if !input_dir.is_dir() {
        return Err(AppError::not_found("Input folder", input_dir));
    }

    let mut images: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .is_some_and(|name| has_image_format(&name.to_string_lossy(), &options.formats))
        })
        .collect();
    images.sort();

    let mut report = BatchReport::new();
    if options.dry_run {
        for image in images {
            report.done(format!("{} (would resize to {}px)", image.display(), options.max_size));
        }
        return Ok(report);
    }

    runner.require(FFMPEG)?;
    fs::create_dir_all(output_dir)?;
    for image in images {
        let Some(file_name) = image.file_name() else { continue };
        let output = output_dir.join(file_name);
        let label = format!("{} -> {}", image.display(), output.display());
        let args = image_resize_args(&image, &output, options.max_size, options.quality);
        let result = runner.run_checked(FFMPEG, &args);
        if let Err(err) = &result {
            tracing::warn!(image = %image.display(), error = %err, "resize failed");
        }
        report.record(label, result);
    }
    Ok(report)
}
