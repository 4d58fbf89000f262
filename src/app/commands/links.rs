//! Symlink bookkeeping.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::app::AppContext;
use crate::domain::config::expand_tilde;
use crate::domain::{AppError, BatchReport, LinkConfig};
use crate::ports::{ConfigStore, GitPort};

/// Create every configured link under the link location.
///
/// An occupied link path fails that link only; the rest are still attempted.
pub fn create<S: ConfigStore, G: GitPort>(ctx: &AppContext<S, G>) -> Result<BatchReport, AppError> {
    let config = ctx.store().load()?;
    let link_location = config.get_link_location();
    fs::create_dir_all(&link_location)?;

    let mut report = BatchReport::new();
    for link in &config.links {
        let link_path = link_location.join(&link.name);
        let label = format!("{} -> {}", link.name, link.target);
        if fs::symlink_metadata(&link_path).is_ok() {
            tracing::warn!(path = %link_path.display(), "link path already exists");
            report.failed(label, format!("{} already exists", link_path.display()));
            continue;
        }
        report.record(label, symlink(&expand_tilde(&link.target), &link_path));
    }
    Ok(report)
}

/// Store a link to `target` (made absolute against `cwd`) named `name`.
pub fn add<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
    target: &str,
    name: &str,
    cwd: &Path,
) -> Result<LinkConfig, AppError> {
    let target = absolutize(&expand_tilde(target), cwd);
    let link = LinkConfig::new(target.to_string_lossy(), name)?;
    ctx.store().update(|config| {
        config.links.push(link.clone());
        Ok((link, true))
    })
}

pub fn list<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
) -> Result<Vec<LinkConfig>, AppError> {
    Ok(ctx.store().load()?.links)
}

/// Join `path` onto `cwd` when relative and drop `.`/`..` components lexically.
fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> Result<(), AppError> {
    std::os::unix::fs::symlink(target, link)?;
    Ok(())
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> Result<(), AppError> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)?;
    } else {
        std::os::windows::fs::symlink_file(target, link)?;
    }
    Ok(())
}
