use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{ToolOutput, ToolRunner};

/// Runs tools from `PATH` with captured output and no stdin.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn is_available(&self, tool: &str) -> bool {
        let available = Command::new(tool)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        tracing::debug!(tool, available, "checked tool availability");
        available
    }

    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, AppError> {
        tracing::debug!(tool, args = ?args, "running tool");
        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::tool_failed(tool, format!("failed to start: {}", e)))?;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
