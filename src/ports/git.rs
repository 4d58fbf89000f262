use std::path::Path;

use crate::domain::AppError;

/// Port for inspecting and cloning git repositories.
pub trait GitPort {
    /// Origin URL of the repository at `repo_dir`.
    ///
    /// `Ok(None)` when the directory is a repository without an `origin` remote.
    fn remote_origin_url(&self, repo_dir: &Path) -> Result<Option<String>, AppError>;

    /// Clone `url` into `destination`.
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<(), AppError>;
}
