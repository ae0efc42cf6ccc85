//! Payment solution clients
//!
//! Concrete implementations of the DepositGateway trait for each PayStage solution.

pub mod paystage;

pub use paystage::{
    BankTransfer, BankTransferClient, Card, CardClient, EWallet, EWalletClient, SolutionClient,
};
