//! Deposit gateway trait definitions
//!
//! Defines the common interface shared by every payment solution client.

use crate::error::GatewayResult;
use crate::payments::environment::Environment;
use crate::payments::types::{DepositPayload, SolutionProfile};
use async_trait::async_trait;

/// A payment solution family handled by the gateway.
///
/// Solutions differ only in the fields they add to the `details` block, so each
/// one is a marker type carrying a [`SolutionProfile`].
pub trait PaymentSolution: Send + Sync + 'static {
    /// Short name used in logs
    const NAME: &'static str;

    fn profile() -> SolutionProfile;
}

/// Trait for deposit intent clients
#[async_trait]
pub trait DepositGateway: Send + Sync {
    /// Initiate a deposit intent
    ///
    /// Signs the request with the payload's credentials, translates the payload into
    /// the gateway schema and issues a single `POST /deposit/intent`.
    ///
    /// # Returns
    /// * `reqwest::Response` - The gateway's reply, whatever its status
    async fn deposit_intent(&self, payload: DepositPayload) -> GatewayResult<reqwest::Response>;

    fn environment(&self) -> &Environment;

    fn profile(&self) -> SolutionProfile;
}
