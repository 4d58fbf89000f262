use std::path::Path;
use std::process::Command;

use git2::{ErrorCode, Repository};

use crate::domain::AppError;
use crate::ports::GitPort;

/// Remote inspection through libgit2; cloning through the `git` CLI so the
/// user's credential helpers and SSH agent apply.
#[derive(Debug, Clone, Default)]
pub struct GitRepositoryAdapter;

impl GitRepositoryAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new("git").args(args).output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitPort for GitRepositoryAdapter {
    fn remote_origin_url(&self, repo_dir: &Path) -> Result<Option<String>, AppError> {
        let repo = Repository::open(repo_dir).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })?;

        match repo.find_remote("origin") {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::find_remote(origin)".to_string(),
                details: e.to_string(),
            }),
        }
    }

    fn clone_repo(&self, url: &str, destination: &Path) -> Result<(), AppError> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let destination = destination.to_string_lossy();
        self.run(&["clone", "--", url, destination.as_ref()])?;
        tracing::info!(url, destination = %destination, "cloned repository");
        Ok(())
    }
}
