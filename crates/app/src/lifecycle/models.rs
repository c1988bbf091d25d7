//! Lifecycle Models

/// What an install registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    /// Display strings created or refreshed.
    pub resources_installed: usize,
}

/// What an uninstall removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UninstallReport {
    pub requirements_removed: u64,
    pub settings_removed: u64,
    pub resources_removed: u64,
}
