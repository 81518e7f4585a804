//! Configuration for a verification run.
//!
//! - `.env` parsing in [`env_file`]
//! - The read-only environment snapshot in [`environment`]
//! - Deployment addresses, credential names and timeouts in [`settings`]
//!
//! # Example
//!
//! ```
//! use setup_verifier::config::{Environment, VerifierConfig};
//!
//! let env = Environment::from_pairs([("VERIFY_BACKEND_URL", "http://127.0.0.1:9000")]);
//! let config = VerifierConfig::from_env(&env);
//! assert_eq!(config.backend_endpoint("health"), "http://127.0.0.1:9000/health");
//! ```

pub mod env_file;
pub mod environment;
pub mod settings;

pub use env_file::EnvFileParser;
pub use environment::{Environment, ENV_FILE_NAME};
pub use settings::{
    VerifierConfig, BACKEND_URL_VAR, CREDENTIAL_PLACEHOLDER, CREDENTIAL_VAR,
    DEFAULT_BACKEND_URL, DEFAULT_FRONTEND_URL, FRONTEND_URL_VAR, SAMPLE_INPUT,
};
