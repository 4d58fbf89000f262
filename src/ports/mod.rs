mod config_store;
mod git;
mod tool_runner;

pub use config_store::ConfigStore;
pub use git::GitPort;
pub use tool_runner::{ToolOutput, ToolRunner};
