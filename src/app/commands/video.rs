//! Video extraction through ffmpeg.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::tools::{
    DEFAULT_SCENE_THRESHOLD, FFMPEG, TranscodeSettings, avchd_stream_dir, avchd_transcode_args,
    extract_mp3_args, is_avchd_stream, parse_scene_cuts, scene_cut_args, scene_detect_args,
    scene_file_name, scenes_from_cuts,
};
use crate::domain::{AppError, BatchReport};
use crate::ports::ToolRunner;

/// Transcode every `.MTS` stream of an AVCHD container to MP4.
///
/// Output goes to `output_dir`, or the container folder itself when unset.
pub fn extract_avchd(
    runner: &impl ToolRunner,
    container: &Path,
    output_dir: Option<&Path>,
) -> Result<BatchReport, AppError> {
    runner.require(FFMPEG)?;
    let stream_dir = avchd_stream_dir(container);
    if !stream_dir.is_dir() {
        return Err(AppError::not_found("AVCHD stream folder", stream_dir));
    }
    let output_dir = output_dir.unwrap_or(container);
    fs::create_dir_all(output_dir)?;

    let mut streams: Vec<PathBuf> = fs::read_dir(&stream_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.file_name().is_some_and(|name| is_avchd_stream(&name.to_string_lossy()))
        })
        .collect();
    streams.sort();

    let settings = TranscodeSettings::default();
    let mut report = BatchReport::new();
    for stream in streams {
        let stem = stream.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let output = output_dir.join(format!("{}.mp4", stem));
        let label = format!("{} -> {}", stream.display(), output.display());
        let result = runner.run_checked(FFMPEG, &avchd_transcode_args(&stream, &output, &settings));
        if let Err(err) = &result {
            tracing::warn!(stream = %stream.display(), error = %err, "transcode failed");
        }
        report.record(label, result);
    }
    Ok(report)
}

pub fn extract_audio_as_mp3(
    runner: &impl ToolRunner,
    input: &Path,
    output: &Path,
) -> Result<(), AppError> {
    runner.require(FFMPEG)?;
    if !input.is_file() {
        return Err(AppError::not_found("Input video", input));
    }
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    runner.run_checked(FFMPEG, &extract_mp3_args(input, output))?;
    tracing::info!(input = %input.display(), output = %output.display(), "extracted audio");
    Ok(())
}

/// Split a video at detected scene changes into `output_dir/scene_NNN.<ext>`.
pub fn extract_scenes(
    runner: &impl ToolRunner,
    input: &Path,
    output_dir: &Path,
    threshold: Option<f64>,
) -> Result<BatchReport, AppError> {
    let threshold = threshold.unwrap_or(DEFAULT_SCENE_THRESHOLD);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(AppError::Validation(format!(
            "Scene threshold must be between 0 and 1, got {}",
            threshold
        )));
    }
    runner.require(FFMPEG)?;
    if !input.is_file() {
        return Err(AppError::not_found("Input video", input));
    }
    fs::create_dir_all(output_dir)?;

    let detection = runner.run_checked(FFMPEG, &scene_detect_args(input, threshold))?;
    let cuts = parse_scene_cuts(&detection.stderr);
    tracing::debug!(cuts = cuts.len(), threshold, "detected scene changes");

    let mut report = BatchReport::new();
    for scene in scenes_from_cuts(&cuts) {
        let output = output_dir.join(scene_file_name(&scene, input));
        let label = output.display().to_string();
        report.record(label, runner.run_checked(FFMPEG, &scene_cut_args(input, &scene, &output)));
    }
    Ok(report)
}
