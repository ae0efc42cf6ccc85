use anyhow::{anyhow, Context, Result};
use paystage_gateway::config::GatewayConfig;
use paystage_gateway::payments::types::{Customer, DepositPayload, TransactionDetails};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Payload file read from disk; credentials come from the environment
#[derive(Debug, Deserialize)]
struct PayloadFile {
    customer: Customer,
    details: TransactionDetails,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: paystage-deposit <payload.json>"))?;

    // Load configuration
    let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;
    let credentials = config
        .credentials
        .clone()
        .context("PAYSTAGE_PUBLIC_KEY and PAYSTAGE_SECRET_KEY must be set")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read payload file {}", path))?;
    let file: PayloadFile =
        serde_json::from_str(&raw).with_context(|| format!("Invalid payload in {}", path))?;

    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Solution: {:?}", config.solution);

    let payload = DepositPayload {
        customer: file.customer,
        details: file.details,
        credentials,
    };

    let response = config
        .gateway()
        .deposit_intent(payload)
        .await
        .context("Deposit intent request failed")?;

    let status = response.status();
    let body = response.text().await.context("Failed to read gateway response")?;

    println!("{}", status);
    println!("{}", body);

    Ok(())
}
