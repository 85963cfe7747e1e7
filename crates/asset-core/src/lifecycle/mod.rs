//! Package lifecycle handling
//!
//! Maps package manager operations onto the synchronizers. A package's
//! install path comes from a [`PackageLocator`]; its configuration file is
//! inspected and the declared source paths are installed or uninstalled.
//!
//! Operations can run immediately or be deferred. Deferred operations are
//! held in two FIFO queues and flushed uninstalls first, so a package that
//! replaces another never has its fresh assets removed by the old one.

mod manager;
mod operation;
mod package;

pub use manager::{AssetManager, NamespaceStatus};
pub use operation::{OperationQueue, PackageOperation};
pub use package::{Package, PackageLocator, StaticLocator, VendorLocator};
