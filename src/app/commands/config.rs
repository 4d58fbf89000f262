use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Copy the config document aside, returning the copy's path.
pub fn backup<S: ConfigStore>(store: &S) -> Result<PathBuf, AppError> {
    let path = store.backup()?;
    tracing::info!(backup = %path.display(), "backed up config");
    Ok(path)
}
