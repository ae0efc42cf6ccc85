//! Integration tests for deposit intent requests
//!
//! A local httpmock server stands in for the gateway so the outgoing request
//! (path, headers and body) can be asserted end to end.

use httpmock::prelude::*;
use paystage_gateway::payments::client::ClientOptions;
use paystage_gateway::payments::providers::{BankTransferClient, CardClient, EWalletClient};
use paystage_gateway::payments::signature::generate_digest;
use paystage_gateway::{
    Credentials, Currency, Customer, DepositGateway, DepositPayload, Environment,
    TransactionDetails,
};
use serde_json::json;
use std::time::Duration;

fn payload(reference_no: &str) -> DepositPayload {
    DepositPayload {
        customer: Customer {
            address_line1: "88 Ayala Ave".to_string(),
            city: "Makati".to_string(),
            country: "PH".to_string(),
            email: "maria@example.com".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            mobile: "09171234567".to_string(),
            state: "Metro Manila".to_string(),
            zip: "1226".to_string(),
        },
        details: TransactionDetails {
            amount: 100.50,
            redirect_url: "https://merchant.example/return".to_string(),
            reference_no: reference_no.to_string(),
            currency: Currency::Usd,
        },
        credentials: Credentials::new("pk_123", "sk_abc"),
    }
}

fn customer_json() -> serde_json::Value {
    json!({
        "address_line_1": "88 Ayala Ave",
        "city": "Makati",
        "country": "PH",
        "email": "maria@example.com",
        "first_name": "Maria",
        "last_name": "Santos",
        "mobile": "09171234567",
        "state": "Metro Manila",
        "zip": "1226"
    })
}

#[tokio::test]
async fn test_bank_transfer_intent_is_signed_and_mapped() {
    let server = MockServer::start_async().await;
    let digest = generate_digest("pk_123", "sk_abc", "REF001").unwrap();

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/deposit/intent")
                .header("content-type", "application/json")
                .header("accept", "application/json")
                .header("x-gateway-key", "pk_123")
                .header("x-gateway-secret", digest.as_str())
                .json_body(json!({
                    "customer": customer_json(),
                    "details": {
                        "reference_no": "REF001",
                        "redirect_url": "https://merchant.example/return",
                        "amount": 100.50,
                        "method": "local_bank_transfer",
                        "currency": "USD",
                        "receiving_currency": "JPY"
                    }
                }));
            then.status(200)
                .json_body(json!({ "status": "success", "reference_no": "REF001" }));
        })
        .await;

    let client = BankTransferClient::with_environment(Environment::Custom(server.base_url()));
    let response = client.deposit_intent(payload("REF001")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["reference_no"], "REF001");
}

#[tokio::test]
async fn test_e_wallet_intent_carries_gcash_solution() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/deposit/intent").json_body(json!({
                "customer": customer_json(),
                "details": {
                    "reference_no": "REF-EW-7",
                    "redirect_url": "https://merchant.example/return",
                    "amount": 100.50,
                    "method": "e_wallet",
                    "currency": "USD",
                    "solution": "gcash"
                }
            }));
            then.status(201);
        })
        .await;

    let client = EWalletClient::with_environment(Environment::Custom(server.base_url()));
    let response = client.deposit_intent(payload("REF-EW-7")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_card_intent_and_error_status_passthrough() {
    let server = MockServer::start_async().await;
    let digest = generate_digest("pk_123", "sk_abc", "REF-CARD").unwrap();

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/deposit/intent")
                .header("x-gateway-secret", digest.as_str())
                .json_body(json!({
                    "customer": customer_json(),
                    "details": {
                        "reference_no": "REF-CARD",
                        "redirect_url": "https://merchant.example/return",
                        "amount": 100.50,
                        "method": "credit_debit_card",
                        "currency": "USD"
                    }
                }));
            then.status(422)
                .json_body(json!({ "message": "invalid currency" }));
        })
        .await;

    let client = CardClient::with_environment(Environment::Custom(server.base_url()));
    let response = client.deposit_intent(payload("REF-CARD")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "invalid currency");
}

#[tokio::test]
async fn test_each_call_is_signed_independently() {
    let server = MockServer::start_async().await;
    let first_digest = generate_digest("pk_123", "sk_abc", "REF-A").unwrap();
    let second_digest = generate_digest("pk_123", "sk_abc", "REF-B").unwrap();

    let first = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/deposit/intent")
                .header("x-gateway-secret", first_digest.as_str());
            then.status(200);
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/deposit/intent")
                .header("x-gateway-secret", second_digest.as_str());
            then.status(200);
        })
        .await;

    let client = CardClient::with_environment(Environment::Custom(server.base_url()));
    client.deposit_intent(payload("REF-A")).await.unwrap();
    client.deposit_intent(payload("REF-B")).await.unwrap();

    first.assert_hits_async(1).await;
    second.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_timeout_is_reported_as_transport_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/deposit/intent");
            then.status(200).delay(Duration::from_millis(500));
        })
        .await;

    let client = BankTransferClient::with_environment(Environment::Custom(server.base_url()))
        .with_options(ClientOptions::with_timeout(Duration::from_millis(50)));
    let err = client.deposit_intent(payload("REF-SLOW")).await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client =
        EWalletClient::with_environment(Environment::Custom("http://127.0.0.1:9".to_string()));
    let err = client.deposit_intent(payload("REF-DOWN")).await.unwrap_err();
    assert!(err.is_transport());
}
