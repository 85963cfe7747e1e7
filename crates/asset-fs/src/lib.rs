//! Filesystem layer for the asset manager
//!
//! Provides normalized path handling, locked atomic writes, the recursive
//! copy/remove helpers used by the synchronizers, and format-agnostic
//! settings loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
