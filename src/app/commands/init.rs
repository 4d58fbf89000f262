use std::path::PathBuf;

use crate::app::commands::projects::scan_project_dirs;
use crate::domain::config::{DEFAULT_LINK_LOCATION, DEFAULT_PROJECT_LOCATION};
use crate::domain::{AppError, FlowConfig};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub link_location: String,
    pub project_location: String,
    /// Fill `project_names` from the existing project directories.
    pub capture: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            link_location: DEFAULT_LINK_LOCATION.to_string(),
            project_location: DEFAULT_PROJECT_LOCATION.to_string(),
            capture: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub config_path: PathBuf,
    pub captured_projects: usize,
}

/// Execute the init command.
///
/// Never overwrites an existing config.
pub fn execute<S: ConfigStore>(store: &S, options: InitOptions) -> Result<InitOutcome, AppError> {
    if store.exists() {
        return Err(AppError::ConfigExists(store.path().to_path_buf()));
    }

    let mut config = FlowConfig::new(options.link_location, options.project_location);
    if options.capture {
        let location = config.get_project_location();
        if location.is_dir() {
            config.project_names = scan_project_dirs(&location)?;
        } else {
            tracing::warn!(
                location = %location.display(),
                "project location missing, nothing captured"
            );
        }
    }

    store.save(&config)?;
    tracing::info!(path = %store.path().display(), "created config");

    Ok(InitOutcome {
        config_path: store.path().to_path_buf(),
        captured_projects: config.project_names.len(),
    })
}
