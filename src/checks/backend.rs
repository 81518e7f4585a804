//! Backend API checks: health, visuals listing, and visual generation.

use serde::Serialize;
use serde_json::Value;

use crate::config::VerifierConfig;
use crate::error::{Result, VerifierError};

use super::http::field_text;
use super::{Check, CheckOutcome, HttpProbe};

/// `GET /health` must answer `200` with a JSON body, which is echoed.
pub struct BackendHealthCheck<'a> {
    config: &'a VerifierConfig,
    probe: &'a HttpProbe,
}

impl<'a> BackendHealthCheck<'a> {
    pub fn new(config: &'a VerifierConfig, probe: &'a HttpProbe) -> Self {
        Self { config, probe }
    }
}

impl Check for BackendHealthCheck<'_> {
    fn name(&self) -> &str {
        "Backend Health"
    }

    fn announce(&self) -> &str {
        "Testing backend health..."
    }

    fn run(&self) -> Result<CheckOutcome> {
        let body = self.probe.get_json(
            &self.config.backend_endpoint("health"),
            self.config.request_timeout,
        )?;
        Ok(CheckOutcome::new(format!("Backend is healthy: {}", body)))
    }
}

/// `GET /visuals` must answer `200`; the number of visuals is reported.
pub struct VisualsEndpointCheck<'a> {
    config: &'a VerifierConfig,
    probe: &'a HttpProbe,
}

impl<'a> VisualsEndpointCheck<'a> {
    pub fn new(config: &'a VerifierConfig, probe: &'a HttpProbe) -> Self {
        Self { config, probe }
    }
}

/// Length of the `visuals` array; absent or non-array counts as empty.
pub fn visual_count(body: &Value) -> usize {
    body.get("visuals")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

impl Check for VisualsEndpointCheck<'_> {
    fn name(&self) -> &str {
        "Visuals Endpoint"
    }

    fn announce(&self) -> &str {
        "Testing visuals endpoint..."
    }

    fn run(&self) -> Result<CheckOutcome> {
        let body = self.probe.get_json(
            &self.config.backend_endpoint("visuals"),
            self.config.request_timeout,
        )?;
        let count = visual_count(&body);
        Ok(CheckOutcome::new(format!(
            "Visuals endpoint working: {} visuals found",
            count
        )))
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    user_input: &'a str,
}

/// `POST /generate-visual` must answer `200` with `"success": true`.
pub struct VisualGenerationCheck<'a> {
    config: &'a VerifierConfig,
    probe: &'a HttpProbe,
}

impl<'a> VisualGenerationCheck<'a> {
    pub fn new(config: &'a VerifierConfig, probe: &'a HttpProbe) -> Self {
        Self { config, probe }
    }
}

impl Check for VisualGenerationCheck<'_> {
    fn name(&self) -> &str {
        "Visual Generation"
    }

    fn announce(&self) -> &str {
        "Testing visual generation..."
    }

    fn run(&self) -> Result<CheckOutcome> {
        let request = GenerateRequest {
            user_input: &self.config.sample_input,
        };
        let body = self.probe.post_json(
            &self.config.backend_endpoint("generate-visual"),
            &request,
            self.config.generation_timeout,
        )?;

        // Anything but a literal `true` is a failure.
        if body.get("success").and_then(Value::as_bool) != Some(true) {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("generation reported failure without an error message");
            return Err(VerifierError::Rejected {
                message: message.to_string(),
            });
        }

        Ok(CheckOutcome::new("Visual generation successful")
            .with_detail(format!("Visual ID: {}", field_text(&body, "visual_id")))
            .with_detail(format!("Input: {}", field_text(&body, "user_input"))))
    }
}
