//! Frontend reachability check.

use crate::config::VerifierConfig;
use crate::error::Result;

use super::{Check, CheckOutcome, HttpProbe};

/// Passes when the frontend root answers `200`. The body is not inspected.
pub struct FrontendAccessCheck<'a> {
    config: &'a VerifierConfig,
    probe: &'a HttpProbe,
}

impl<'a> FrontendAccessCheck<'a> {
    pub fn new(config: &'a VerifierConfig, probe: &'a HttpProbe) -> Self {
        Self { config, probe }
    }
}

impl Check for FrontendAccessCheck<'_> {
    fn name(&self) -> &str {
        "Frontend Access"
    }

    fn announce(&self) -> &str {
        "Testing frontend access..."
    }

    fn run(&self) -> Result<CheckOutcome> {
        self.probe
            .get(&self.config.frontend_root(), self.config.request_timeout)?;
        Ok(CheckOutcome::new("Frontend is accessible"))
    }
}
