//! Project folder bookkeeping.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, BatchReport};
use crate::ports::{ConfigStore, GitPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddProjectOutcome {
    Added,
    AlreadyExists,
}

/// Sorted names of the non-hidden directories directly under `location`.
pub fn scan_project_dirs(location: &Path) -> Result<Vec<String>, AppError> {
    if !location.is_dir() {
        return Err(AppError::not_found("Project location", location));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(location)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if !name.starts_with('.') => names.push(name),
            Ok(_) => {}
            Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 directory name"),
        }
    }
    names.sort();
    Ok(names)
}

pub fn list<S: ConfigStore, G: GitPort>(ctx: &AppContext<S, G>) -> Result<Vec<String>, AppError> {
    Ok(ctx.store().load()?.project_names)
}

/// Replace `project_names` with the directories found under the project location.
///
/// Names without a matching directory are dropped.
pub fn capture<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
) -> Result<Vec<String>, AppError> {
    ctx.store().update(|config| {
        let names = scan_project_dirs(&config.get_project_location())?;
        config.project_names = names.clone();
        tracing::info!(count = names.len(), "captured projects");
        Ok((names, true))
    })
}

/// Create `project_location/<name>/<subdir>` for every configured pair.
pub fn create<S: ConfigStore, G: GitPort>(ctx: &AppContext<S, G>) -> Result<BatchReport, AppError> {
    let config = ctx.store().load()?;
    let location = config.get_project_location();

    let mut report = BatchReport::new();
    for name in &config.project_names {
        for subdir in &config.project_subdirs {
            let dir = location.join(name).join(subdir);
            let label = dir.display().to_string();
            if dir.is_dir() {
                report.skipped(label, "already exists");
                continue;
            }
            report.record(label, fs::create_dir_all(&dir).map_err(AppError::from));
        }
    }
    Ok(report)
}

pub fn add<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    name: &str,
) -> Result<AddProjectOutcome, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Project name must not be empty".to_string()));
    }
    ctx.store().update(|config| {
        if config.add_project(name) {
            Ok((AddProjectOutcome::Added, true))
        } else {
            Ok((AddProjectOutcome::AlreadyExists, false))
        }
    })
}
