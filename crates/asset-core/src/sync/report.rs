use serde::Serialize;

/// Outcome of one or more install/uninstall operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Namespaces copied into the public root
    pub installed: Vec<String>,
    /// Namespaces deleted from the public root
    pub removed: Vec<String>,
    /// Non-fatal problems, such as unsafe package configuration
    pub warnings: Vec<String>,
    /// Package operations that failed
    pub errors: Vec<String>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// No package operation failed. Warnings do not count.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Nothing was installed or removed and nothing went wrong.
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
            && self.removed.is_empty()
            && self.warnings.is_empty()
            && self.errors.is_empty()
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Fold another report into this one, keeping order.
    pub fn merge(&mut self, other: SyncReport) {
        self.installed.extend(other.installed);
        self.removed.extend(other.removed);
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}
