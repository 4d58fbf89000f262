//! flowutils: project folders, symlinks, git mirrors, keyword sorting and
//! media/document helpers driven by one YAML config.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api;
pub use domain::{AppError, FlowConfig};
