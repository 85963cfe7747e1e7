//! Asset synchronization core
//!
//! Packages declare asset directories in their PHP configuration. This
//! crate decides whether that configuration is safe to read, extracts the
//! declared directories without executing anything, copies every asset
//! namespace into the project's public root, and records what it copied in
//! the public root's ignore file so uninstall removes exactly that.
//!
//! - **classifier**: tokenizer and static safety check for configuration
//! - **config**: static evaluation, declared path extraction and settings
//! - **ledger**: the ignore file as a record of installed namespaces
//! - **sync**: install and uninstall synchronizers
//! - **lifecycle**: package operations, locators and deferred dispatch
//!
//! # Example
//!
//! ```no_run
//! use asset_core::{AssetManager, Package, PackageOperation, Settings, VendorLocator};
//!
//! fn run() -> asset_core::Result<()> {
//!     let root = std::path::Path::new("/srv/app");
//!     let settings = Settings::discover(root)?;
//!     let locator = VendorLocator::new(settings.vendor_dir(root));
//!     let manager = AssetManager::new(root, settings, locator);
//!
//!     let report = manager.handle(&PackageOperation::Install(Package::new("acme/widget")))?;
//!     println!("installed {:?}", report.installed);
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod sync;

pub use classifier::{
    Classification, UnsafeConstruct, UnsafeKind, classify, declares_asset_config,
};
pub use config::{
    ConfigInspection, ConfigLoader, ConfigValue, Settings, declared_paths, inspect_package_config,
};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use lifecycle::{
    AssetManager, NamespaceStatus, OperationQueue, Package, PackageLocator, PackageOperation,
    StaticLocator, VendorLocator,
};
pub use sync::{AssetInstaller, AssetNamespace, AssetUninstaller, SyncReport};
