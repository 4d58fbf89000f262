//! Keyword-based file sorting.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::sorting::plan_moves;
use crate::domain::{AppError, BatchReport, SortFolderConfig, SortingRuleConfig};
use crate::ports::{ConfigStore, GitPort};

/// Result of sorting one configured folder.
#[derive(Debug)]
pub enum FolderRun {
    Sorted { folder: PathBuf, report: BatchReport },
    Missing { folder: PathBuf },
    Failed { folder: PathBuf, error: String },
}

/// Move the files directly inside `folder` into rule sub folders.
///
/// Each file moves at most once, into the first rule that matches it. With
/// `dry_run` nothing on disk changes and every planned move is reported done.
pub fn sort_folder(
    folder: &Path,
    rules: &[SortingRuleConfig],
    dry_run: bool,
) -> Result<BatchReport, AppError> {
    let mut file_names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => file_names.push(name),
            Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    file_names.sort();

    let mut report = BatchReport::new();
    for planned in plan_moves(&file_names, rules) {
        let source = folder.join(&planned.file_name);
        let destination_dir = folder.join(&planned.sub_folder_name);
        let label = format!("{} -> {}", source.display(), planned.sub_folder_name);
        if dry_run {
            report.done(label);
            continue;
        }
        let result = fs::create_dir_all(&destination_dir)
            .and_then(|_| fs::rename(&source, destination_dir.join(&planned.file_name)))
            .map_err(AppError::from);
        match &result {
            Ok(()) => {
                tracing::debug!(file = %source.display(), sub = %planned.sub_folder_name, "moved")
            }
            Err(err) => tracing::warn!(file = %source.display(), error = %err, "move failed"),
        }
        report.record(label, result);
    }
    Ok(report)
}

/// Sort every configured folder that exists.
///
/// A folder that cannot be listed is reported as failed and the remaining
/// folders are still sorted.
pub fn run<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    dry_run: bool,
) -> Result<Vec<FolderRun>, AppError> {
    let config = ctx.store().load()?;

    let mut runs = Vec::new();
    for folder_config in &config.sort.folder_configs {
        let folder = folder_config.get_target_folder();
        if !folder.is_dir() {
            tracing::warn!(folder = %folder.display(), "sort folder does not exist");
            runs.push(FolderRun::Missing { folder });
            continue;
        }
        match sort_folder(&folder, &folder_config.rules, dry_run) {
            Ok(report) => runs.push(FolderRun::Sorted { folder, report }),
            Err(err) => {
                tracing::warn!(folder = %folder.display(), error = %err, "cannot sort folder");
                runs.push(FolderRun::Failed { folder, error: err.to_string() });
            }
        }
    }
    Ok(runs)
}

/// Returns `true` when a new folder config was created for `target_folder`.
pub fn add_rule<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    target_folder: &str,
    sub_folder_name: &str,
    keywords: Vec<String>,
) -> Result<bool, AppError> {
    let rule = SortingRuleConfig::new(sub_folder_name, keywords)?;
    ctx.store().update(|config| Ok((config.add_sort_rule(target_folder, rule), true)))
}

pub fn list<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
) -> Result<Vec<SortFolderConfig>, AppError> {
    Ok(ctx.store().load()?.sort.folder_configs)
}
