pub mod git_repository;
pub mod process_tool_runner;
pub mod yaml_config_store;

pub use git_repository::GitRepositoryAdapter;
pub use process_tool_runner::ProcessToolRunner;
pub use yaml_config_store::YamlConfigStore;
