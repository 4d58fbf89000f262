//! `ConfigStore` backed by a single YAML file.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::NamedTempFile;

use crate::domain::config::paths::config_path_from_env;
use crate::domain::{AppError, FlowConfig};
use crate::ports::ConfigStore;

#[derive(Debug, Clone)]
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the location named by `FLOW_CONFIG`, or the default location.
    pub fn from_env() -> Self {
        Self::new(config_path_from_env())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{}.bak", Local::now().format("%Y%m%d_%H%M%S")));
        PathBuf::from(name)
    }
}

impl ConfigStore for YamlConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<FlowConfig, AppError> {
        if !self.exists() {
            return Err(AppError::ConfigNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(FlowConfig::default());
        }
        serde_yaml::from_str(&content).map_err(|err| AppError::ConfigParse {
            path: self.path.clone(),
            details: err.to_string(),
        })
    }

    fn save(&self, config: &FlowConfig) -> Result<(), AppError> {
        let content = serde_yaml::to_string(config)
            .map_err(|err| AppError::ConfigSerialize(err.to_string()))?;

        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        // Staged beside the target and renamed over it: readers see the old or the new document.
        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            fs::set_permissions(staged.path(), metadata.permissions())?;
        }
        staged.persist(&self.path).map_err(|err| AppError::Io(err.error))?;

        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    fn backup(&self) -> Result<PathBuf, AppError> {
        if !self.exists() {
            return Err(AppError::ConfigNotFound(self.path.clone()));
        }
        let backup_path = self.backup_path();
        fs::copy(&self.path, &backup_path)?;
        tracing::debug!(backup = %backup_path.display(), "copied config");
        Ok(backup_path)
    }
}
