use crate::domain::AppError;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Last non-empty stderr line, used in failure reports.
    pub fn error_summary(&self) -> String {
        self.stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| match self.code {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            })
    }
}

/// Port for running external binaries synchronously.
pub trait ToolRunner {
    /// Whether `<tool> -version` runs and exits successfully.
    fn is_available(&self, tool: &str) -> bool;

    /// Run `tool` with `args` to completion. Spawn failures are errors;
    /// non-zero exits are reported through `ToolOutput::success`.
    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, AppError>;

    /// Fail with `AppError::ToolUnavailable` unless `tool` is runnable.
    fn require(&self, tool: &str) -> Result<(), AppError> {
        if self.is_available(tool) {
            Ok(())
        } else {
            Err(AppError::ToolUnavailable(tool.to_string()))
        }
    }

    /// Run `tool` and map a non-zero exit to `AppError::ToolFailed`.
    fn run_checked(&self, tool: &str, args: &[String]) -> Result<ToolOutput, AppError> {
        let output = self.run(tool, args)?;
        if output.success {
            Ok(output)
        } else {
            Err(AppError::tool_failed(tool, output.error_summary()))
        }
    }
}
