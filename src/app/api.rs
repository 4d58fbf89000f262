//! API Facade for the application.
//!
//! Config-backed functions resolve the config document from `FLOW_CONFIG`
//! (or `~/.flowutils/config.yaml`) on every call. Tool-backed functions run
//! binaries from `PATH`.

use std::path::{Path, PathBuf};

use crate::adapters::{GitRepositoryAdapter, ProcessToolRunner, YamlConfigStore};
use crate::app::AppContext;
use crate::app::commands::{audio, config, image, init, links, pdf, projects, repos, sort, video};
use crate::domain::url::forklift_uri;
use crate::ports::ConfigStore;

pub use crate::app::commands::image::ResizeOptions;
pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::app::commands::projects::AddProjectOutcome;
pub use crate::app::commands::repos::CollectOutcome;
pub use crate::app::commands::sort::FolderRun;
pub use crate::domain::tools::MediaInfo;
pub use crate::domain::{
    AppError, BatchReport, GitRepoConfig, ItemOutcome, ItemStatus, LinkConfig, SortFolderConfig,
};

fn create_context() -> AppContext<YamlConfigStore, GitRepositoryAdapter> {
    AppContext::new(YamlConfigStore::from_env(), GitRepositoryAdapter::new())
}

/// Location of the config document after applying `FLOW_CONFIG`.
pub fn config_path() -> PathBuf {
    YamlConfigStore::from_env().path().to_path_buf()
}

// =============================================================================
// Config API
// =============================================================================

/// Write a fresh config. Fails if one already exists.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    init::execute(&YamlConfigStore::from_env(), options)
}

pub fn config_exists() -> bool {
    YamlConfigStore::from_env().exists()
}

/// Copy the config aside and return the backup path.
pub fn backup_config() -> Result<PathBuf, AppError> {
    config::backup(&YamlConfigStore::from_env())
}

// =============================================================================
// Projects API
// =============================================================================

pub fn list_projects() -> Result<Vec<String>, AppError> {
    projects::list(&create_context())
}

pub fn capture_projects() -> Result<Vec<String>, AppError> {
    projects::capture(&create_context())
}

pub fn create_projects() -> Result<BatchReport, AppError> {
    projects::create(&create_context())
}

pub fn add_project(name: &str) -> Result<AddProjectOutcome, AppError> {
    projects::add(&create_context(), name)
}

// =============================================================================
// Links API
// =============================================================================

pub fn create_links() -> Result<BatchReport, AppError> {
    links::create(&create_context())
}

/// Record a link; relative targets resolve against the current directory.
pub fn add_link(target: &str, name: &str) -> Result<LinkConfig, AppError> {
    links::add(&create_context(), target, name, &std::env::current_dir()?)
}

pub fn list_links() -> Result<Vec<LinkConfig>, AppError> {
    links::list(&create_context())
}

// =============================================================================
// Repos API
// =============================================================================

pub fn collect_repos() -> Result<CollectOutcome, AppError> {
    repos::collect(&create_context())
}

pub fn list_repos() -> Result<Vec<GitRepoConfig>, AppError> {
    repos::list(&create_context())
}

pub fn create_repos() -> Result<BatchReport, AppError> {
    repos::create(&create_context())
}

// =============================================================================
// Sort API
// =============================================================================

pub fn run_sort(dry_run: bool) -> Result<Vec<FolderRun>, AppError> {
    sort::run(&create_context(), dry_run)
}

/// Returns `true` when a new folder config was created.
pub fn add_sort_rule(
    target_folder: &str,
    sub_folder_name: &str,
    keywords: Vec<String>,
) -> Result<bool, AppError> {
    sort::add_rule(&create_context(), target_folder, sub_folder_name, keywords)
}

pub fn list_sort_rules() -> Result<Vec<SortFolderConfig>, AppError> {
    sort::list(&create_context())
}

// =============================================================================
// Media & document API
// =============================================================================

pub fn audio_to_m4a(input: &Path, output: Option<&Path>) -> Result<PathBuf, AppError> {
    audio::to_m4a(&ProcessToolRunner::new(), input, output)
}

pub fn audio_info(input: &Path) -> Result<MediaInfo, AppError> {
    audio::info(&ProcessToolRunner::new(), input)
}

pub fn extract_avchd(container: &Path, output_dir: Option<&Path>) -> Result<BatchReport, AppError> {
    video::extract_avchd(&ProcessToolRunner::new(), container, output_dir)
}

pub fn extract_audio_as_mp3(input: &Path, output: &Path) -> Result<(), AppError> {
    video::extract_audio_as_mp3(&ProcessToolRunner::new(), input, output)
}

pub fn extract_scenes(
    input: &Path,
    output_dir: &Path,
    threshold: Option<f64>,
) -> Result<BatchReport, AppError> {
    video::extract_scenes(&ProcessToolRunner::new(), input, output_dir, threshold)
}

pub fn compress_pdf(
    input: &Path,
    output: Option<&Path>,
    dpi: Option<u32>,
) -> Result<PathBuf, AppError> {
    pdf::compress(&ProcessToolRunner::new(), input, output, dpi)
}

pub fn resize_images(
    input_dir: &Path,
    output_dir: &Path,
    options: &ResizeOptions,
) -> Result<BatchReport, AppError> {
    image::resize(&ProcessToolRunner::new(), input_dir, output_dir, options)
}

/// `openforklift://` link for a file path.
pub fn forklift_link(path: &str) -> String {
    forklift_uri(path)
}
