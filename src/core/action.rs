//! Actions that modules can return to communicate with the app

use crate::app::Page;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch to another page
    Navigate(Page),

    /// Copy text to the system clipboard
    Copy(String),

    /// Write the current page's data to disk
    Export(ExportTarget),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open or close the sidebar
    ToggleSidebar,

    /// Close whatever overlay is open
    CloseOverlay,

    /// Request quit
    Quit,
}

/// What an export writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    /// Visible tree rows as CSV
    TreeRows,
    /// Whole tree as JSON
    TreeJson,
    /// Home page project table as CSV
    Projects,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
