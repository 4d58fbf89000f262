//! Git checkout bookkeeping.

use walkdir::WalkDir;

use crate::app::AppContext;
use crate::domain::{AppError, BatchReport, GitRepoConfig};
use crate::ports::{ConfigStore, GitPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOutcome {
    pub found: usize,
    pub added: usize,
    pub total: usize,
}

/// Record every git checkout with an `origin` remote under the project location.
pub fn collect<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
) -> Result<CollectOutcome, AppError> {
    ctx.store().update(|config| {
        let root = config.get_project_location();
        if !root.is_dir() {
            return Err(AppError::not_found("Project location", root));
        }

        let mut found = Vec::new();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_dir() || !entry.path().join(".git").exists() {
                continue;
            }
            match ctx.git().remote_origin_url(entry.path()) {
                Ok(Some(url)) => {
                    tracing::debug!(dir = %entry.path().display(), url = %url, "found repository");
                    found.push(GitRepoConfig::new(url, entry.path().to_string_lossy()));
                }
                Ok(None) => {
                    tracing::debug!(dir = %entry.path().display(), "repository has no origin")
                }
                Err(err) => {
                    tracing::warn!(
                        dir = %entry.path().display(),
                        error = %err,
                        "skipping repository"
                    )
                }
            }
        }

        let found_count = found.len();
        let added = found.into_iter().filter(|repo| config.add_git_repo(repo.clone())).count();
        if added > 0 {
            tracing::info!(added, "recorded repositories");
        }
        let outcome = CollectOutcome { found: found_count, added, total: config.git_repos.len() };
        Ok((outcome, added > 0))
    })
}

pub fn list<S: ConfigStore, G: GitPort>(
    ctx: &AppContext<S, G>,
) -> Result<Vec<GitRepoConfig>, AppError> {
    Ok(ctx.store().load()?.git_repos)
}

/// Clone every recorded repository whose checkout is absent.
pub fn create<S: ConfigStore, G: GitPort>(ctx: &AppContext<S, G>) -> Result<BatchReport, AppError> {
    let config = ctx.store().load()?;

    let mut report = BatchReport::new();
    for repo in &config.git_repos {
        let dir = repo.checkout_dir();
        let label = format!("{} -> {}", repo.url, dir.display());
        if dir.join(".git").exists() {
            report.skipped(label, "already cloned");
            continue;
        }
        let result = ctx.git().clone_repo(&repo.url, &dir);
        if let Err(err) = &result {
            tracing::warn!(url = %repo.url, error = %err, "clone failed");
        }
        report.record(label, result);
    }
    Ok(report)
}
