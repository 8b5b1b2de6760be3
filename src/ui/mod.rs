//! User-facing console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled output to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use pytest_mirror::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("Missing tests detected:");
//! ui.item("tests/test_foo.py");
//!
//! assert!(ui.has_warning("Missing tests"));
//! assert_eq!(ui.items(), ["tests/test_foo.py"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, MirrorTheme};

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message (hidden in quiet mode).
    fn message(&mut self, msg: &str);

    /// Display a success message (hidden in quiet mode).
    fn success(&mut self, msg: &str);

    /// Display a warning message. Hidden in quiet mode.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display one entry of an itemized report.
    fn item(&mut self, item: &str);

    /// Display a diagnostic line (verbose mode only).
    fn debug(&mut self, msg: &str);

    /// Write machine-readable output verbatim.
    fn raw(&mut self, output: &str);
}
