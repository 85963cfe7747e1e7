use std::collections::VecDeque;
use std::fmt;

use super::package::Package;

/// A package manager operation the asset manager reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOperation {
    Install(Package),
    Uninstall(Package),
    /// Replace `from` with `to`: assets of `from` are removed, then those
    /// of `to` are installed
    Update { from: Package, to: Package },
}

impl fmt::Display for PackageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install(package) => write!(f, "install {package}"),
            Self::Uninstall(package) => write!(f, "uninstall {package}"),
            Self::Update { from, to } => write!(f, "update {from} -> {to}"),
        }
    }
}

/// Deferred work, drained uninstalls first.
#[derive(Debug, Clone, Default)]
pub struct OperationQueue {
    uninstalls: VecDeque<Package>,
    installs: VecDeque<Package>,
}

impl OperationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an operation. An update queues an uninstall of `from` and an
    /// install of `to`.
    pub fn push(&mut self, operation: PackageOperation) {
        match operation {
            PackageOperation::Install(package) => self.installs.push_back(package),
            PackageOperation::Uninstall(package) => self.uninstalls.push_back(package),
            PackageOperation::Update { from, to } => {
                self.uninstalls.push_back(from);
                self.installs.push_back(to);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.uninstalls.len() + self.installs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take everything queued: every uninstall in FIFO order, then every
    /// install in FIFO order.
    pub fn drain(&mut self) -> Vec<PackageOperation> {
        let uninstalls = self.uninstalls.drain(..).map(PackageOperation::Uninstall);
        let installs = self.installs.drain(..).map(PackageOperation::Install);
        uninstalls.chain(installs).collect()
    }
}
