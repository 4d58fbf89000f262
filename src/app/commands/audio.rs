use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::tools::{
    FFMPEG, FFPROBE, MediaInfo, default_m4a_path, mp3_to_m4a_args, parse_probe_output,
    probe_format_args,
};
use crate::ports::ToolRunner;

/// Transcode an MP3 into AAC in an M4A container. Returns the written path.
pub fn to_m4a(
    runner: &impl ToolRunner,
    input: &Path,
    output: Option<&Path>,
) -> Result<PathBuf, AppError> {
    runner.require(FFMPEG)?;
    if !input.is_file() {
        return Err(AppError::not_found("Input file", input));
    }

    let output = output.map(Path::to_path_buf).unwrap_or_else(|| default_m4a_path(input));
    runner.run_checked(FFMPEG, &mp3_to_m4a_args(input, &output))?;
    tracing::info!(input = %input.display(), output = %output.display(), "converted to m4a");
    Ok(output)
}

pub fn info(runner: &impl ToolRunner, input: &Path) -> Result<MediaInfo, AppError> {
    runner.require(FFPROBE)?;
    if !input.is_file() {
        return Err(AppError::not_found("Input file", input));
    }

    let output = runner.run_checked(FFPROBE, &probe_format_args(input))?;
    parse_probe_output(&output.stdout)
}
