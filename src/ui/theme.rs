//! Visual theme and styling.

use console::Style;

/// Console styles for pytest-mirror output.
#[derive(Debug, Clone)]
pub struct MirrorTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for paths in itemized lists (bold).
    pub path: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for MirrorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            path: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            path: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an entry of an itemized list.
    pub fn format_item(&self, item: &str) -> String {
        format!("  - {}", self.path.apply_to(item))
    }

    /// Format a diagnostic line.
    pub fn format_debug(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("[debug] {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = MirrorTheme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = MirrorTheme::plain().format_warning("Missing tests detected:");
        assert_eq!(msg, "⚠ Missing tests detected:");
    }

    #[test]
    fn theme_formats_error() {
        let msg = MirrorTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_item() {
        let msg = MirrorTheme::plain().format_item("tests/test_foo.py");
        assert_eq!(msg, "  - tests/test_foo.py");
    }

    #[test]
    fn theme_formats_debug() {
        let msg = MirrorTheme::plain().format_debug("cwd: /tmp");
        assert_eq!(msg, "[debug] cwd: /tmp");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = MirrorTheme::default();
        let new = MirrorTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
