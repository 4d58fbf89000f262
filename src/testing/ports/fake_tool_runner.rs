use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ToolOutput, ToolRunner};

/// Records invocations and answers with canned output.
///
/// A call fails when any argument contains one of the registered failure markers.
#[derive(Default)]
pub struct FakeToolRunner {
    available: HashSet<String>,
    outputs: HashMap<String, ToolOutput>,
    fail_markers: Vec<String>,
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, tool: &str) -> Self {
        self.available.insert(tool.to_string());
        self
    }

    pub fn with_stdout(mut self, tool: &str, stdout: &str) -> Self {
        let output = self.outputs.entry(tool.to_string()).or_insert_with(success);
        output.stdout = stdout.to_string();
        self
    }

    pub fn with_stderr(mut self, tool: &str, stderr: &str) -> Self {
        let output = self.outputs.entry(tool.to_string()).or_insert_with(success);
        output.stderr = stderr.to_string();
        self
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_markers.push(marker.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

fn success() -> ToolOutput {
    ToolOutput { success: true, code: Some(0), ..ToolOutput::default() }
}

impl ToolRunner for FakeToolRunner {
    fn is_available(&self, tool: &str) -> bool {
        self.available.contains(tool)
    }

    fn run(&self, tool: &str, args: &[String]) -> Result<ToolOutput, AppError> {
        self.calls.lock().unwrap().push((tool.to_string(), args.to_vec()));
        let failed = args.iter().any(|arg| self.fail_markers.iter().any(|m| arg.contains(m)));
        if failed {
            return Ok(ToolOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr: "Conversion failed!".to_string(),
            });
        }
        Ok(self.outputs.get(tool).cloned().unwrap_or_else(success))
    }
}
