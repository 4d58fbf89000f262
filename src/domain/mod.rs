pub mod config;
pub mod error;
pub mod outcome;
pub mod sorting;
pub mod tools;
pub mod url;

pub use config::{
    FlowConfig, GitRepoConfig, LinkConfig, SortConfig, SortFolderConfig, SortingRuleConfig,
};
pub use error::AppError;
pub use outcome::{BatchReport, ItemOutcome, ItemStatus};
