//! Status vocabulary for check results.
//!
//! `StatusKind` is the single set of icons and labels the summary uses,
//! with a bracketed fallback for logs and other non-TTY output.

use super::theme::VerifierTheme;

/// Outcome of a check as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Pass,
    /// Check failed or crashed.
    Fail,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
        }
    }

    /// Upper-case label used in the summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Pass => "[PASS]",
            Self::Fail => "[FAIL]",
        }
    }

    /// Styled icon and label using the given theme.
    pub fn styled(self, theme: &VerifierTheme) -> String {
        let text = format!("{} {}", self.icon(), self.label());
        match self {
            Self::Pass => theme.success.apply_to(text).to_string(),
            Self::Fail => theme.error.apply_to(text).to_string(),
        }
    }

    /// Format a status line: message + styled status.
    pub fn format(self, theme: &VerifierTheme, msg: &str) -> String {
        format!("{}: {}", msg, self.styled(theme))
    }

    /// Format a status line for non-TTY: message + bracketed status.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{}: {}", msg, self.bracketed())
    }
}

impl From<bool> for StatusKind {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}
