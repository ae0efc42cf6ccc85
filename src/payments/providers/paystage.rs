//! PayStage deposit intent clients
//!
//! One generic client parameterized by payment solution. The bank transfer (Jpay),
//! e-wallet (GCash) and card (Dixonpay) clients are aliases over it.

use crate::error::GatewayResult;
use crate::payments::client::{ClientOptions, SignedContext};
use crate::payments::environment::Environment;
use crate::payments::traits::{DepositGateway, PaymentSolution};
use crate::payments::types::{
    Currency, DepositIntentRequest, DepositPayload, Solution, SolutionProfile, TransactionMethod,
};
use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use tracing::info;

pub const DEPOSIT_INTENT_PATH: &str = "deposit/intent";

/// Local bank transfer settled in JPY
#[derive(Debug, Clone, Copy)]
pub struct BankTransfer;

impl PaymentSolution for BankTransfer {
    const NAME: &'static str = "jpay";

    fn profile() -> SolutionProfile {
        SolutionProfile {
            method: TransactionMethod::LocalBankTransfer,
            solution: None,
            receiving_currency: Some(Currency::Jpy),
        }
    }
}

/// GCash e-wallet
#[derive(Debug, Clone, Copy)]
pub struct EWallet;

impl PaymentSolution for EWallet {
    const NAME: &'static str = "gcash";

    fn profile() -> SolutionProfile {
        SolutionProfile {
            method: TransactionMethod::EWallet,
            solution: Some(Solution::Gcash),
            receiving_currency: None,
        }
    }
}

/// Credit or debit card
#[derive(Debug, Clone, Copy)]
pub struct Card;

impl PaymentSolution for Card {
    const NAME: &'static str = "dixonpay";

    fn profile() -> SolutionProfile {
        SolutionProfile {
            method: TransactionMethod::CreditDebitCard,
            solution: None,
            receiving_currency: None,
        }
    }
}

pub type BankTransferClient = SolutionClient<BankTransfer>;
pub type EWalletClient = SolutionClient<EWallet>;
pub type CardClient = SolutionClient<Card>;

/// Deposit intent client for one payment solution.
///
/// Holds only the target environment and transport options. Credentials arrive
/// with every payload and a fresh HTTP client is built for each call.
pub struct SolutionClient<S: PaymentSolution> {
    environment: Environment,
    options: ClientOptions,
    _solution: PhantomData<S>,
}

impl<S: PaymentSolution> SolutionClient<S> {
    /// Create a client for a named environment (`develop`, `staging`, `production`).
    ///
    /// Unknown names resolve to the local placeholder, see [`Environment::resolve`].
    pub fn new(env: &str) -> Self {
        Self::with_environment(Environment::resolve(env))
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self {
            environment,
            options: ClientOptions::default(),
            _solution: PhantomData,
        }
    }

    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// JSON body this client would send for `payload`
    pub fn request_body(payload: &DepositPayload) -> GatewayResult<Vec<u8>> {
        let body = DepositIntentRequest::from_payload(payload, &S::profile());
        Ok(serde_json::to_vec(&body)?)
    }
}

impl<S: PaymentSolution> Clone for SolutionClient<S> {
    fn clone(&self) -> Self {
        Self {
            environment: self.environment.clone(),
            options: self.options.clone(),
            _solution: PhantomData,
        }
    }
}

impl<S: PaymentSolution> fmt::Debug for SolutionClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionClient")
            .field("solution", &S::NAME)
            .field("environment", &self.environment)
            .field("options", &self.options)
            .finish()
    }
}

#[async_trait]
impl<S: PaymentSolution> DepositGateway for SolutionClient<S> {
    async fn deposit_intent(&self, payload: DepositPayload) -> GatewayResult<reqwest::Response> {
        let details = &payload.details;
        info!(
            "Initiating {} deposit intent on {}: {} {} {}",
            S::NAME,
            self.environment,
            details.amount,
            details.currency,
            details.reference_no
        );

        // The signed reference and the body reference come from the same field.
        let context =
            SignedContext::sign(&self.environment, &payload.credentials, &details.reference_no)?;
        let client = context.build_client(&self.options)?;
        let body = Self::request_body(&payload)?;

        let response = client
            .post(context.url(DEPOSIT_INTENT_PATH))
            .body(body)
            .send()
            .await?;

        info!(
            "{} deposit intent answered: reference={}, status={}",
            S::NAME,
            details.reference_no,
            response.status()
        );

        Ok(response)
    }

    fn environment(&self) -> &Environment {
        &self.environment
    }

    fn profile(&self) -> SolutionProfile {
        S::profile()
    }
}
