//! Install and uninstall synchronizers
//!
//! - **discovery**: find asset namespaces under declared source paths
//! - **installer**: copy namespaces into the public root and record them
//! - **uninstaller**: delete recorded namespaces and drop their entries

mod discovery;
mod installer;
mod report;
mod uninstaller;

pub use discovery::{AssetNamespace, discover_namespaces, resolve_sources};
pub use installer::AssetInstaller;
pub use report::SyncReport;
pub use uninstaller::AssetUninstaller;
