//! PayStage deposit intent integration
//!
//! Environment resolution, request signing, per-call HTTP client construction and
//! the payload mapping shared by the bank transfer, e-wallet and card solutions.

pub mod client;
pub mod environment;
pub mod providers;
pub mod signature;
pub mod traits;
pub mod types;
