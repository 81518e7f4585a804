//! Verifier settings.
//!
//! The deployment under test lives at fixed local addresses. The two base
//! URLs can be moved with `VERIFY_BACKEND_URL` and `VERIFY_FRONTEND_URL`;
//! everything else is a constant of the check suite.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Url;

use super::environment::Environment;

/// Default backend API address.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default frontend address.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Environment variable overriding the backend address.
pub const BACKEND_URL_VAR: &str = "VERIFY_BACKEND_URL";

/// Environment variable overriding the frontend address.
pub const FRONTEND_URL_VAR: &str = "VERIFY_FRONTEND_URL";

/// Credential the backend needs to generate visuals.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Value shipped in `.env.example`; counts as "not configured".
pub const CREDENTIAL_PLACEHOLDER: &str = "your_openai_api_key_here";

/// Prompt sent to the generation endpoint.
pub const SAMPLE_INPUT: &str = "A simple animated circle that grows and shrinks";

static BACKEND_DEFAULT: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_BACKEND_URL).expect("DEFAULT_BACKEND_URL must parse")
});

static FRONTEND_DEFAULT: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_FRONTEND_URL).expect("DEFAULT_FRONTEND_URL must parse")
});

/// Settings shared by all checks.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Backend API base URL.
    pub backend_url: Url,
    /// Frontend base URL.
    pub frontend_url: Url,
    /// Name of the credential variable.
    pub credential_var: String,
    /// Placeholder value that means the credential was never filled in.
    pub credential_placeholder: String,
    /// Input posted to the generation endpoint.
    pub sample_input: String,
    /// Timeout for GET checks.
    pub request_timeout: Duration,
    /// Timeout for the generation check.
    pub generation_timeout: Duration,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_DEFAULT.clone(),
            frontend_url: FRONTEND_DEFAULT.clone(),
            credential_var: CREDENTIAL_VAR.to_string(),
            credential_placeholder: CREDENTIAL_PLACEHOLDER.to_string(),
            sample_input: SAMPLE_INPUT.to_string(),
            request_timeout: Duration::from_secs(10),
            generation_timeout: Duration::from_secs(30),
        }
    }
}

impl VerifierConfig {
    /// Defaults with base URL overrides applied from `env`.
    ///
    /// An override that does not parse as a URL is ignored with a warning.
    pub fn from_env(env: &Environment) -> Self {
        let mut config = Self::default();
        if let Some(url) = url_override(env, BACKEND_URL_VAR) {
            config.backend_url = url;
        }
        if let Some(url) = url_override(env, FRONTEND_URL_VAR) {
            config.frontend_url = url;
        }
        config
    }

    /// Point both base URLs somewhere else.
    pub fn with_urls(mut self, backend: Url, frontend: Url) -> Self {
        self.backend_url = backend;
        self.frontend_url = frontend;
        self
    }

    /// Full URL of a backend endpoint, e.g. `backend_endpoint("health")`.
    pub fn backend_endpoint(&self, path: &str) -> String {
        join(&self.backend_url, path)
    }

    /// Frontend root URL.
    pub fn frontend_root(&self) -> String {
        join(&self.frontend_url, "")
    }

    /// Interactive API docs served by the backend.
    pub fn api_docs_url(&self) -> String {
        self.backend_endpoint("docs")
    }

    /// Port the backend is expected on.
    pub fn backend_port(&self) -> Option<u16> {
        self.backend_url.port_or_known_default()
    }

    /// Port the frontend is expected on.
    pub fn frontend_port(&self) -> Option<u16> {
        self.frontend_url.port_or_known_default()
    }
}

fn join(base: &Url, path: &str) -> String {
    let base = base.as_str().trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

fn url_override(env: &Environment, var: &str) -> Option<Url> {
    let raw = env.get_non_empty(var)?;
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", var, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_parse() {
        assert!(Url::parse(DEFAULT_BACKEND_URL).is_ok());
        assert!(Url::parse(DEFAULT_FRONTEND_URL).is_ok());
        assert_eq!(BACKEND_DEFAULT.port(), Some(8000));
        assert_eq!(FRONTEND_DEFAULT.port(), Some(3000));
    }

    #[test]
    fn defaults_target_local_deployment() {
        let config = VerifierConfig::default();
        assert_eq!(config.backend_endpoint("health"), "http://localhost:8000/health");
        assert_eq!(config.frontend_root(), "http://localhost:3000");
        assert_eq!(config.api_docs_url(), "http://localhost:8000/docs");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.generation_timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_ports() {
        let config = VerifierConfig::default();
        assert_eq!(config.backend_port(), Some(8000));
        assert_eq!(config.frontend_port(), Some(3000));
    }

    #[test]
    fn from_env_applies_overrides() {
        let env = Environment::from_pairs([
            (BACKEND_URL_VAR, "http://127.0.0.1:9000/"),
            (FRONTEND_URL_VAR, "http://127.0.0.1:5173"),
        ]);

        let config = VerifierConfig::from_env(&env);

        assert_eq!(
            config.backend_endpoint("visuals"),
            "http://127.0.0.1:9000/visuals"
        );
        assert_eq!(config.frontend_root(), "http://127.0.0.1:5173");
        assert_eq!(config.backend_port(), Some(9000));
    }

    #[test]
    fn from_env_ignores_invalid_urls() {
        let env = Environment::from_pairs([(BACKEND_URL_VAR, "not a url")]);

        let config = VerifierConfig::from_env(&env);

        assert_eq!(config.backend_port(), Some(8000));
    }

    #[test]
    fn from_env_ignores_empty_overrides() {
        let env = Environment::from_pairs([(FRONTEND_URL_VAR, "")]);
        let config = VerifierConfig::from_env(&env);
        assert_eq!(config.frontend_root(), DEFAULT_FRONTEND_URL);
    }

    #[test]
    fn known_default_port_for_https() {
        let env = Environment::from_pairs([(BACKEND_URL_VAR, "https://api.example.com")]);
        let config = VerifierConfig::from_env(&env);
        assert_eq!(config.backend_port(), Some(443));
    }
}
