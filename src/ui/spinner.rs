//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::VerifierTheme;
use super::SpinnerHandle;

/// A spinner shown while a check waits on the network.
///
/// When the bar is hidden (stdout is not a terminal) the finish message is
/// printed as a plain line instead, so piped output still carries it.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: VerifierTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: VerifierTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that never draws.
    pub fn hidden(theme: VerifierTheme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
        }
    }

    fn finish(&mut self, line: String) {
        if self.bar.is_hidden() {
            self.bar.finish_and_clear();
            println!("{}", line);
            return;
        }
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish(line);
    }
}
