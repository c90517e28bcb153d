//! Keyboard shortcut labels shown in help text

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms; terminals rarely forward Cmd
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
pub const THEME_SHORTCUT: &str = "Ctrl+T";

/// Quit hint shown on the right of the status bar
pub const QUIT_HINT: &str = " Esc/^C^C:quit ";
