//! Argument templates and output parsing for external media/document tools.
//!
//! Everything here is pure: the `ToolRunner` port does the invoking.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

pub const FFMPEG: &str = "ffmpeg";
pub const FFPROBE: &str = "ffprobe";
pub const GHOSTSCRIPT: &str = "gs";

pub const DEFAULT_SCENE_THRESHOLD: f64 = 0.4;
pub const DEFAULT_PDF_DPI: u32 = 150;
pub const DEFAULT_IMAGE_SIZE: u32 = 1024;
pub const DEFAULT_IMAGE_QUALITY: u8 = 85;
pub const MAX_IMAGE_QUALITY: u8 = 95;

/// Encoder settings for AVCHD transcoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeSettings {
    pub video_codec: String,
    pub crf: u8,
    pub audio_bitrate: String,
}

impl Default for TranscodeSettings {
    fn default() -> Self {
        Self { video_codec: "libx264".to_string(), crf: 23, audio_bitrate: "128k".to_string() }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub fn mp3_to_m4a_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-n".into(),
        "-i".into(),
        path_arg(input),
        "-vn".into(),
        "-c:a".into(),
        "aac".into(),
        "-b:a".into(),
        "192k".into(),
        path_arg(output),
    ]
}

/// `foo.mp3` -> `foo.m4a`; other names get `.m4a` appended.
pub fn default_m4a_path(input: &Path) -> PathBuf {
    let is_mp3 = input.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"));
    if is_mp3 {
        input.with_extension("m4a")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".m4a");
        PathBuf::from(name)
    }
}

pub fn probe_format_args(input: &Path) -> Vec<String> {
    vec![
        "-v".into(),
        "error".into(),
        "-show_entries".into(),
        "format=duration,format_name".into(),
        "-of".into(),
        "json".into(),
        path_arg(input),
    ]
}

/// Duration and container format reported by ffprobe.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub duration_secs: f64,
    pub format_name: String,
}

impl MediaInfo {
    /// One-line summary; the duration always carries six decimals.
    pub fn summary(&self) -> String {
        format!("File duration: {:.6} s, Format: {}", self.duration_secs, self.format_name)
    }
}

#[derive(Deserialize)]
struct ProbeOutput {
    format: ProbeFormat,
}

#[derive(Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    format_name: Option<String>,
}

pub fn parse_probe_output(stdout: &str) -> Result<MediaInfo, AppError> {
    let parsed: ProbeOutput = serde_json::from_str(stdout)
        .map_err(|err| AppError::tool_failed(FFPROBE, format!("unreadable output: {}", err)))?;
    let duration_secs = match parsed.format.duration.as_deref() {
        Some(value) => value.trim().parse::<f64>().map_err(|err| {
            AppError::tool_failed(FFPROBE, format!("invalid duration '{}': {}", value, err))
        })?,
        None => 0.0,
    };
    Ok(MediaInfo {
        duration_secs,
        format_name: parsed.format.format_name.unwrap_or_else(|| "unknown".to_string()),
    })
}

pub fn avchd_transcode_args(
    input: &Path,
    output: &Path,
    settings: &TranscodeSettings,
) -> Vec<String> {
    vec![
        "-n".into(),
        "-i".into(),
        path_arg(input),
        "-c:v".into(),
        settings.video_codec.clone(),
        "-crf".into(),
        settings.crf.to_string(),
        "-c:a".into(),
        "aac".into(),
        "-b:a".into(),
        settings.audio_bitrate.clone(),
        path_arg(output),
    ]
}

/// Stream directory inside an AVCHD container folder.
pub fn avchd_stream_dir(container: &Path) -> PathBuf {
    container.join("BDMV").join("STREAM")
}

pub fn is_avchd_stream(file_name: &str) -> bool {
    Path::new(file_name).extension().is_some_and(|ext| ext.eq_ignore_ascii_case("mts"))
}

pub fn extract_mp3_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-n".into(),
        "-i".into(),
        path_arg(input),
        "-q:a".into(),
        "0".into(),
        "-map".into(),
        "a".into(),
        "-b:a".into(),
        "192k".into(),
        path_arg(output),
    ]
}

pub fn scene_detect_args(input: &Path, threshold: f64) -> Vec<String> {
    vec![
        "-hide_banner".into(),
        "-i".into(),
        path_arg(input),
        "-filter:v".into(),
        format!("select='gt(scene,{})',showinfo", threshold),
        "-f".into(),
        "null".into(),
        "-".into(),
    ]
}

/// Collect `pts_time:` values from ffmpeg `showinfo` log lines.
///
/// Returned cut points are ascending and deduplicated.
pub fn parse_scene_cuts(stderr: &str) -> Vec<f64> {
    let mut cuts: Vec<f64> = stderr
        .lines()
        .filter(|line| line.contains("showinfo"))
        .filter_map(|line| {
            let rest = &line[line.find("pts_time:")? + "pts_time:".len()..];
            rest.split_whitespace().next()?.parse::<f64>().ok()
        })
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect();
    cuts.sort_by(|a, b| a.total_cmp(b));
    cuts.dedup();
    cuts
}

/// A contiguous part of a video between two cut points.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub index: usize,
    pub start: f64,
    /// `None` runs to the end of the input.
    pub end: Option<f64>,
}

pub fn scenes_from_cuts(cuts: &[f64]) -> Vec<Scene> {
    let mut scenes = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0.0;
    for (index, cut) in cuts.iter().enumerate() {
        scenes.push(Scene { index: index + 1, start, end: Some(*cut) });
        start = *cut;
    }
    scenes.push(Scene { index: cuts.len() + 1, start, end: None });
    scenes
}

pub fn scene_file_name(scene: &Scene, input: &Path) -> String {
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mp4".to_string());
    format!("scene_{:03}.{}", scene.index, ext)
}

pub fn scene_cut_args(input: &Path, scene: &Scene, output: &Path) -> Vec<String> {
    let mut args = vec!["-n".into(), "-ss".into(), format!("{:.3}", scene.start)];
    if let Some(end) = scene.end {
        args.push("-to".into());
        args.push(format!("{:.3}", end));
    }
    args.extend(["-i".into(), path_arg(input), "-c".into(), "copy".into(), path_arg(output)]);
    args
}

pub fn pdf_compress_args(input: &Path, output: &Path, dpi: u32) -> Vec<String> {
    vec![
        "-sDEVICE=pdfwrite".into(),
        "-dCompatibilityLevel=1.4".into(),
        "-dPDFSETTINGS=/screen".into(),
        "-dNOPAUSE".into(),
        "-dQUIET".into(),
        "-dBATCH".into(),
        format!("-r{}", dpi),
        format!("-sOutputFile={}", output.display()),
        path_arg(input),
    ]
}

/// `scan.pdf` -> `scan_compressed.pdf` next to the input.
pub fn default_compressed_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}_compressed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_compressed", stem),
    };
    input.with_file_name(file_name)
}

pub fn has_image_format(file_name: &str, formats: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    formats.iter().any(|fmt| lower.ends_with(&fmt.to_lowercase()))
}

/// Map quality 0..=95 onto ffmpeg's `-q:v` scale (31 worst .. 2 best).
pub fn ffmpeg_image_qscale(quality: u8) -> u8 {
    let quality = u32::from(quality.min(MAX_IMAGE_QUALITY));
    let span = 31 - 2;
    (31 - quality * span / u32::from(MAX_IMAGE_QUALITY)) as u8
}

pub fn image_resize_args(input: &Path, output: &Path, max_size: u32, quality: u8) -> Vec<String> {
    vec![
        "-n".into(),
        "-i".into(),
        path_arg(input),
        "-vf".into(),
        format!(
            "scale='min({0},iw)':'min({0},ih)':force_original_aspect_ratio=decrease",
            max_size
        ),
        "-q:v".into(),
        ffmpeg_image_qscale(quality).to_string(),
        path_arg(output),
    ]
}
