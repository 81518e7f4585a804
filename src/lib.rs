//! Setup Verifier - smoke-test a local backend and frontend deployment.
//!
//! Runs a fixed sequence of independent checks (credential, backend health,
//! frontend reachability, visuals listing, visual generation), then prints a
//! pass/fail summary with remediation tips.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and the shared HTTP probe
//! - [`config`] - `.env` loading, environment snapshot, deployment settings
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Sequential, isolated execution and the summary
//! - [`ui`] - Terminal output, spinners, and a mock for tests
//!
//! # Example
//!
//! ```
//! use setup_verifier::checks::{Check, EnvironmentCheck};
//! use setup_verifier::config::{Environment, VerifierConfig};
//!
//! let env = Environment::from_pairs([("OPENAI_API_KEY", "sk-test")]);
//! let config = VerifierConfig::default();
//! let outcome = EnvironmentCheck::new(&env, &config).run().unwrap();
//! assert_eq!(outcome.summary, "OpenAI API key is configured");
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

pub use error::{Result, VerifierError};
pub use runner::{run_verification, VerificationReport};
