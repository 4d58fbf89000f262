use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for flowutils operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No config file at the resolved location.
    #[error("Config file not found at {}. Run 'flowutils init' first.", .0.display())]
    ConfigNotFound(PathBuf),

    /// A config file already exists where `init` would write one.
    #[error("Config file already exists at: {}", .0.display())]
    ConfigExists(PathBuf),

    /// The config file is not valid YAML or does not match the schema.
    #[error("Failed to parse config {}: {details}", .path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// The config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(String),

    /// A path given on the command line or in the config does not exist.
    #[error("{what} not found: {}", .path.display())]
    NotFound { what: String, path: PathBuf },

    /// External binary is missing or not runnable.
    #[error("{0} is not installed.")]
    ToolUnavailable(String),

    /// External binary exited with a failure status.
    #[error("{tool} failed: {details}")]
    ToolFailed { tool: String, details: String },

    /// Git inspection or clone failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Invalid user input.
    #[error("{0}")]
    Validation(String),

    /// A batch operation finished with failed items.
    #[error("{failed} of {total} item(s) failed")]
    BatchFailed { failed: usize, total: usize },
}

impl AppError {
    pub fn not_found(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        AppError::NotFound { what: what.into(), path: path.into() }
    }

    pub fn tool_failed(tool: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::ToolFailed { tool: tool.into(), details: details.into() }
    }
}
