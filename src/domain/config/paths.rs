//! Config file location and tilde expansion.
//!
//! Stored config values keep the user's `~` notation; expansion happens only
//! where a path is about to be used.

use std::path::PathBuf;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "FLOW_CONFIG";

/// Config file location when no override is set.
pub const DEFAULT_CONFIG_PATH: &str = "~/.flowutils/config.yaml";

/// Expand a leading `~` to the current user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Resolve the config path from an optional override value.
///
/// An empty override is treated as unset.
pub fn resolve_config_path(override_value: Option<&str>) -> PathBuf {
    match override_value {
        Some(value) if !value.trim().is_empty() => expand_tilde(value),
        _ => expand_tilde(DEFAULT_CONFIG_PATH),
    }
}

/// Resolve the config path from the process environment.
pub fn config_path_from_env() -> PathBuf {
    let value = std::env::var(CONFIG_ENV_VAR).ok();
    resolve_config_path(value.as_deref())
}
