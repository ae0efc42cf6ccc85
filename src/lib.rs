//! Client library for initiating deposit intents against the PayStage payment gateway.
//!
//! ```no_run
//! use paystage_gateway::payments::traits::DepositGateway;
//! use paystage_gateway::payments::providers::BankTransferClient;
//! # async fn run(payload: paystage_gateway::payments::types::DepositPayload) -> paystage_gateway::error::GatewayResult<()> {
//! let client = BankTransferClient::new("production");
//! let response = client.deposit_intent(payload).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod payments;

pub use error::{GatewayError, GatewayResult};
pub use payments::environment::Environment;
pub use payments::providers::{BankTransferClient, CardClient, EWalletClient};
pub use payments::traits::DepositGateway;
pub use payments::types::{Credentials, Currency, Customer, DepositPayload, TransactionDetails};
