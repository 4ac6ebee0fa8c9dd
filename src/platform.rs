//! Platform-specific configuration

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Repository fetch shortcut display
pub const FETCH_SHORTCUT: &str = "Ctrl+G";
