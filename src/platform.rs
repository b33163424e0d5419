//! Platform-specific key hints

/// Submit shortcut display
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Clear-file key display
/// - macOS: "Fn+Delete" (the Delete key sends Backspace)
/// - Linux/Windows: "Del"
#[cfg(target_os = "macos")]
pub const CLEAR_FILE_SHORTCUT: &str = "Fn+Delete";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_FILE_SHORTCUT: &str = "Del";

/// Copy key shown in the acknowledgement dialog
pub const COPY_SHORTCUT: &str = "y";
