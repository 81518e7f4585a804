//! The checks run against a local deployment.
//!
//! Each check is a [`Check`]: a display name, a line announcing what it is
//! doing, and a `run` that returns a tagged result. Checks never print;
//! the runner renders their outcome.
//!
//! [`standard_checks`] builds the fixed suite in its fixed order:
//! Environment, Backend Health, Frontend Access, Visuals Endpoint,
//! Visual Generation.

pub mod backend;
pub mod environment;
pub mod frontend;
pub mod http;

pub use backend::{BackendHealthCheck, VisualGenerationCheck, VisualsEndpointCheck};
pub use environment::EnvironmentCheck;
pub use frontend::FrontendAccessCheck;
pub use http::HttpProbe;

use crate::config::{Environment, VerifierConfig};
use crate::error::Result;

/// One independent verification step.
pub trait Check {
    /// Display name used in the report.
    fn name(&self) -> &str;

    /// Spinner text shown while the check runs.
    fn announce(&self) -> &str;

    /// Run the check.
    fn run(&self) -> Result<CheckOutcome>;
}

/// What a passing check has to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// One-line result.
    pub summary: String,
    /// Extra lines shown indented under the summary.
    pub details: Vec<String>,
}

impl CheckOutcome {
    /// Outcome with a summary only.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            details: Vec::new(),
        }
    }

    /// Add a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

/// Build the standard suite.
pub fn standard_checks<'a>(
    env: &'a Environment,
    config: &'a VerifierConfig,
    probe: &'a HttpProbe,
) -> Vec<Box<dyn Check + 'a>> {
    vec![
        Box::new(EnvironmentCheck::new(env, config)),
        Box::new(BackendHealthCheck::new(config, probe)),
        Box::new(FrontendAccessCheck::new(config, probe)),
        Box::new(VisualsEndpointCheck::new(config, probe)),
        Box::new(VisualGenerationCheck::new(config, probe)),
    ]
}
