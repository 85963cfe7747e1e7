//! Shared test utilities for the asset-manager workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] builder for a project with a public root,
//!   vendored packages and their asset trees

pub mod project;

pub use project::{TestProject, asset_config, asset_config_raw};
