//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, ProgressSpinner, SpinnerHandle, StatusKind, UserInterface, VerifierTheme,
};

/// Indentation for detail lines under a check.
const DETAIL_INDENT: usize = 3;

/// Writes the report to stdout.
///
/// Colors follow [`should_use_colors`]; spinners only animate when stdout
/// is a terminal.
pub struct TerminalUI {
    term: Term,
    theme: VerifierTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            VerifierTheme::new()
        } else {
            VerifierTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn indent() -> String {
        " ".repeat(DETAIL_INDENT)
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}{}", Self::indent(), self.theme.hint.apply_to(hint)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_section(title)).ok();
    }

    fn show_status(&mut self, status: StatusKind, label: &str) {
        let line = if self.term.is_term() {
            status.format(&self.theme, label)
        } else {
            status.format_plain(label)
        };
        writeln!(self.term, "{}{}", Self::indent(), line).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.term.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden(self.theme.clone()))
        }
    }
}
