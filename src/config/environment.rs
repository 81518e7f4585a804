//! Read-only view of environment variables.
//!
//! Checks never touch `std::env` directly. They read from an
//! [`Environment`] captured once at startup, which lets tests hand in an
//! explicit map instead of mutating the process environment.

use std::collections::HashMap;
use std::path::Path;

use super::env_file::EnvFileParser;

/// Name of the dotenv file read from the working directory.
pub const ENV_FILE_NAME: &str = ".env";

/// Immutable key/value snapshot of the environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Build from `key, value` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Capture the process environment layered over the `.env` file in `dir`.
    ///
    /// Process variables win over file entries, so an exported credential
    /// is never shadowed by a stale `.env`. A `.env` that cannot be read is
    /// skipped with a warning; the checks still run against the process
    /// environment.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(ENV_FILE_NAME);
        let mut vars = match EnvFileParser::load_optional(&path) {
            Ok(vars) => vars,
            Err(e) => {
                tracing::warn!("Skipping unreadable {}: {}", path.display(), e);
                HashMap::new()
            }
        };
        if !vars.is_empty() {
            tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
        }
        // Non-UTF-8 variables can't be credentials or URLs; skip them.
        vars.extend(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        );
        Self { vars }
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}
