use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, FlowConfig};
use crate::ports::ConfigStore;

/// In-memory `ConfigStore` that counts saves.
pub struct MemoryConfigStore {
    path: PathBuf,
    config: Mutex<Option<FlowConfig>>,
    saves: Mutex<usize>,
}

impl MemoryConfigStore {
    pub fn empty() -> Self {
        Self {
            path: PathBuf::from("/memory/config.yaml"),
            config: Mutex::new(None),
            saves: Mutex::new(0),
        }
    }

    pub fn with_config(config: FlowConfig) -> Self {
        let store = Self::empty();
        *store.config.lock().unwrap() = Some(config);
        store
    }

    pub fn current(&self) -> FlowConfig {
        self.config.lock().unwrap().clone().expect("no config stored")
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.config.lock().unwrap().is_some()
    }

    fn load(&self) -> Result<FlowConfig, AppError> {
        self.config
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::ConfigNotFound(self.path.clone()))
    }

    fn save(&self, config: &FlowConfig) -> Result<(), AppError> {
        *self.config.lock().unwrap() = Some(config.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    fn backup(&self) -> Result<PathBuf, AppError> {
        if !self.exists() {
            return Err(AppError::ConfigNotFound(self.path.clone()));
        }
        Ok(self.path.with_extension("yaml.bak"))
    }
}
