//! Persistence of the aggregate config.
//!
//! Every mutating command is a whole-document transaction: load, change the
//! in-memory copy, save it back.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, FlowConfig};

/// Port for loading and saving the `FlowConfig` document.
pub trait ConfigStore {
    /// Resolved location of the config document.
    fn path(&self) -> &Path;

    /// Whether a config document is present.
    fn exists(&self) -> bool;

    /// Load the whole document. Missing documents are `AppError::ConfigNotFound`.
    fn load(&self) -> Result<FlowConfig, AppError>;

    /// Replace the whole document.
    fn save(&self, config: &FlowConfig) -> Result<(), AppError>;

    /// Copy the current document aside and return the copy's location.
    fn backup(&self) -> Result<PathBuf, AppError>;

    /// Load, apply `change`, and save when it reports a modification.
    fn update<T, F>(&self, change: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut FlowConfig) -> Result<(T, bool), AppError>,
    {
        let mut config = self.load()?;
        let (value, modified) = change(&mut config)?;
        if modified {
            self.save(&config)?;
        }
        Ok(value)
    }
}
