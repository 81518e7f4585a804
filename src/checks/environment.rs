//! Credential check.

use crate::config::{Environment, VerifierConfig};
use crate::error::{Result, VerifierError};

use super::{Check, CheckOutcome};

/// Passes when the API credential is set to something other than the
/// placeholder. No network access.
pub struct EnvironmentCheck<'a> {
    env: &'a Environment,
    variable: &'a str,
    placeholder: &'a str,
}

impl<'a> EnvironmentCheck<'a> {
    /// Check `config.credential_var` in `env`.
    pub fn new(env: &'a Environment, config: &'a VerifierConfig) -> Self {
        Self {
            env,
            variable: &config.credential_var,
            placeholder: &config.credential_placeholder,
        }
    }
}

impl Check for EnvironmentCheck<'_> {
    fn name(&self) -> &str {
        "Environment"
    }

    fn announce(&self) -> &str {
        "Checking environment..."
    }

    fn run(&self) -> Result<CheckOutcome> {
        match self.env.get_non_empty(self.variable) {
            Some(value) if value != self.placeholder => {
                Ok(CheckOutcome::new("OpenAI API key is configured"))
            }
            _ => Err(VerifierError::MissingCredential {
                variable: self.variable.to_string(),
            }),
        }
    }
}
