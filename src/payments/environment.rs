//! Deployment environments of the PayStage gateway
//!
//! Maps a symbolic deployment name to the base URL every request is sent to.

use crate::error::{GatewayError, GatewayResult};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const DEVELOP_URL: &str = "https://api-develop.paystage.net";
pub const STAGING_URL: &str = "https://api-staging.paystage.net";
pub const PRODUCTION_URL: &str = "https://prod-api-integrate.paystage.net";
pub const LOCAL_URL: &str = "localhost";

/// Gateway deployment a client talks to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    Develop,
    Staging,
    Production,
    /// Placeholder target used when no known environment was named
    #[default]
    Local,
    /// Explicit base URL, e.g. a sandbox mirror or a mock server
    Custom(String),
}

impl Environment {
    /// Resolve a symbolic name, falling back to [`Environment::Local`] for anything unknown.
    ///
    /// The fallback never fails, but it is logged so a misspelled deployment name
    /// does not go unnoticed. Use [`str::parse`] for the strict variant.
    pub fn resolve(name: &str) -> Self {
        match name.parse() {
            Ok(env) => env,
            Err(_) => {
                warn!(
                    "Unrecognized gateway environment '{}', falling back to {}",
                    name, LOCAL_URL
                );
                Environment::Local
            }
        }
    }

    pub fn base_url(&self) -> &str {
        match self {
            Environment::Develop => DEVELOP_URL,
            Environment::Staging => STAGING_URL,
            Environment::Production => PRODUCTION_URL,
            Environment::Local => LOCAL_URL,
            Environment::Custom(url) => url,
        }
    }

    /// Join the base URL with a relative endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(self.base_url(), path)
    }

    pub fn name(&self) -> &str {
        match self {
            Environment::Develop => "develop",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Local => "local",
            Environment::Custom(_) => "custom",
        }
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl FromStr for Environment {
    type Err = GatewayError;

    fn from_str(s: &str) -> GatewayResult<Self> {
        match s {
            "develop" => Ok(Environment::Develop),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            "local" => Ok(Environment::Local),
            other => Err(GatewayError::unknown_environment(other)),
        }
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Environment::resolve(name)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Custom(url) => write!(f, "custom ({})", url),
            other => f.write_str(other.name()),
        }
    }
}
