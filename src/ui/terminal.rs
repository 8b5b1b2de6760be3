//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, MirrorTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Errors go to stderr, everything else to stdout.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: MirrorTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MirrorTheme::new()
        } else {
            MirrorTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn item(&mut self, item: &str) {
        writeln!(self.out, "{}", self.theme.format_item(item)).ok();
    }

    fn debug(&mut self, msg: &str) {
        if self.mode.shows_debug() {
            writeln!(self.out, "{}", self.theme.format_debug(msg)).ok();
        }
    }

    fn raw(&mut self, output: &str) {
        writeln!(self.out, "{}", output).ok();
    }
}
