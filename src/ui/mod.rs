//! Console output for verification runs.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal (or piped) output
//! - [`MockUI`] capturing everything for tests
//! - Spinners, status icons, and remediation hints
//!
//! # Example
//!
//! ```
//! use setup_verifier::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Setup Test");
//! ui.success("Backend is healthy");
//! assert!(ui.has_success("healthy"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, VerifierTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a remediation hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a section title (one per check).
    fn show_section(&mut self, title: &str);

    /// Show one line of the results summary.
    fn show_status(&mut self, status: StatusKind, label: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
