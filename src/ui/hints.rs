//! Remediation hints shown when checks fail.

use crate::config::VerifierConfig;
use crate::error::VerifierError;

/// Hint attached to a single failed check, if the error has an obvious fix.
pub fn for_error(error: &VerifierError) -> Option<String> {
    match error {
        VerifierError::MissingCredential { variable } => {
            Some(format!("Please set {} in your .env file", variable))
        }
        _ => None,
    }
}

/// Tips printed after the summary when the environment check failed.
pub fn setup_tips(config: &VerifierConfig) -> Vec<String> {
    vec![
        "Make sure Docker is running".to_string(),
        "Run: docker-compose up --build".to_string(),
        format!(
            "Check that ports {} and {} are available",
            port_label(config.frontend_port()),
            port_label(config.backend_port())
        ),
        format!("Verify your {} in .env file", config.credential_var),
    ]
}

/// Closing line after a fully green run.
pub fn all_passed() -> &'static str {
    "All tests passed! Your app is ready to use."
}

/// Closing line after a run with failures.
pub fn some_failed() -> &'static str {
    "Some tests failed. Please check the setup."
}

fn port_label(port: Option<u16>) -> String {
    port.map_or_else(|| "?".to_string(), |p| p.to_string())
}
