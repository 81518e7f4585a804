//! Blocking HTTP access for deployment checks.
//!
//! Every request carries its own timeout and must answer with exactly
//! `200 OK`; anything else becomes a [`VerifierError`].

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::{Result, VerifierError};

/// Shared HTTP client for all checks in a run.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Build the client.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("setup-verifier/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VerifierError::Other(e.into()))?;
        Ok(Self { client })
    }

    /// GET `url`, requiring a 200 response.
    pub fn get(&self, url: &str, timeout: Duration) -> Result<Response> {
        self.send(url, self.client.get(url).timeout(timeout))
    }

    /// GET `url` and parse the body as JSON.
    pub fn get_json(&self, url: &str, timeout: Duration) -> Result<Value> {
        let response = self.get(url, timeout)?;
        Self::json(url, response)
    }

    /// POST `body` as JSON to `url` and parse the JSON reply.
    pub fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<Value> {
        let response = self.send(url, self.client.post(url).json(body).timeout(timeout))?;
        Self::json(url, response)
    }

    fn send(&self, url: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!("Requesting {}", url);
        let response = request.send().map_err(|source| VerifierError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        tracing::debug!("{} answered {}", url, status);
        if status != StatusCode::OK {
            return Err(VerifierError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    fn json(url: &str, response: Response) -> Result<Value> {
        response
            .json::<Value>()
            .map_err(|source| VerifierError::InvalidBody {
                url: url.to_string(),
                source,
            })
    }
}

/// Render a JSON field for display, whatever its type.
///
/// Strings are shown without quotes; missing fields and `null` show as `none`.
pub fn field_text(body: &Value, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => "none".to_string(),
        Some(other) => other.to_string(),
    }
}
