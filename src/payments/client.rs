//! Per-request HTTP client construction
//!
//! A [`SignedContext`] is built fresh for every call from the environment, the
//! caller's credentials and the reference number being signed. Nothing here is
//! cached or shared between calls.

use crate::error::{GatewayError, GatewayResult};
use crate::payments::environment::{join_url, Environment};
use crate::payments::signature::generate_digest;
use crate::payments::types::Credentials;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::debug;

pub const GATEWAY_KEY_HEADER: &str = "x-gateway-key";
pub const GATEWAY_SECRET_HEADER: &str = "x-gateway-secret";

/// Transport options a caller may set per client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Total request timeout; `None` waits as long as the transport does
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Base URL plus authentication headers for exactly one request
#[derive(Clone)]
pub struct SignedContext {
    base_url: String,
    public_key: String,
    digest: String,
}

impl SignedContext {
    /// Sign `reference_no` with the caller's credentials for `environment`.
    pub fn sign(
        environment: &Environment,
        credentials: &Credentials,
        reference_no: &str,
    ) -> GatewayResult<Self> {
        let digest = generate_digest(
            &credentials.public_key,
            &credentials.secret_key,
            reference_no,
        )?;

        Ok(Self {
            base_url: environment.base_url().to_string(),
            public_key: credentials.public_key.clone(),
            digest,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Absolute URL for an endpoint path relative to the base URL
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn headers(&self) -> GatewayResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let key = HeaderValue::from_str(&self.public_key)
            .map_err(|_| GatewayError::invalid_header("X-GATEWAY-KEY"))?;
        headers.insert(HeaderName::from_static(GATEWAY_KEY_HEADER), key);

        let mut secret = HeaderValue::from_str(&self.digest)
            .map_err(|_| GatewayError::invalid_header("X-GATEWAY-SECRET"))?;
        secret.set_sensitive(true);
        headers.insert(HeaderName::from_static(GATEWAY_SECRET_HEADER), secret);

        Ok(headers)
    }

    /// Build a client that sends the signed headers on every request.
    pub fn build_client(&self, options: &ClientOptions) -> GatewayResult<Client> {
        let mut builder = Client::builder()
            .default_headers(self.headers()?)
            .user_agent(concat!("paystage-gateway/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        debug!(
            "Gateway client built for {} (timeout: {:?})",
            self.base_url, options.timeout
        );

        Ok(client)
    }
}

impl fmt::Debug for SignedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedContext")
            .field("base_url", &self.base_url)
            .field("public_key", &self.public_key)
            .field("digest", &"<redacted>")
            .finish()
    }
}
