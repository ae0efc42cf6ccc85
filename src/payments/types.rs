//! Deposit intent types and data structures
//!
//! Canonical (caller-facing) payload types and the gateway's wire schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
    Hkd,
    Idr,
    Jpy,
    Myr,
    Php,
    Thb,
    Usd,
    Vnd,
    Krw,
    Inr,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Hkd => "HKD",
            Currency::Idr => "IDR",
            Currency::Jpy => "JPY",
            Currency::Myr => "MYR",
            Currency::Php => "PHP",
            Currency::Thb => "THB",
            Currency::Usd => "USD",
            Currency::Vnd => "VND",
            Currency::Krw => "KRW",
            Currency::Inr => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Gateway `details.method` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMethod {
    LocalBankTransfer,
    EWallet,
    CreditDebitCard,
}

/// Gateway `details.solution` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solution {
    Jpay,
    Gcash,
    Dixonpay,
}

/// Customer identity and address, passed through unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub address_line1: String,
    pub city: String,
    pub country: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub state: String,
    pub zip: String,
}

/// Transaction details supplied by the merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    /// Amount in major currency units
    pub amount: f64,
    /// Where the gateway sends the customer after payment
    pub redirect_url: String,
    /// Merchant reference; also signed into `X-GATEWAY-SECRET`
    pub reference_no: String,
    pub currency: Currency,
}

/// Merchant API key pair, scoped to a single request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub public_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Canonical deposit intent payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositPayload {
    pub customer: Customer,
    pub details: TransactionDetails,
    #[serde(flatten)]
    pub credentials: Credentials,
}

/// Fields one payment solution adds to the `details` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionProfile {
    pub method: TransactionMethod,
    pub solution: Option<Solution>,
    pub receiving_currency: Option<Currency>,
}

/// `customer` block on the wire
#[derive(Debug, Serialize, PartialEq)]
pub struct WireCustomer<'a> {
    pub address_line_1: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub mobile: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
}

/// `details` block on the wire
#[derive(Debug, Serialize, PartialEq)]
pub struct WireDetails<'a> {
    pub reference_no: &'a str,
    pub redirect_url: &'a str,
    pub amount: f64,
    pub method: TransactionMethod,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiving_currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
}

/// Body of `POST /deposit/intent`
#[derive(Debug, Serialize, PartialEq)]
pub struct DepositIntentRequest<'a> {
    pub customer: WireCustomer<'a>,
    pub details: WireDetails<'a>,
}

impl<'a> DepositIntentRequest<'a> {
    /// Translate a canonical payload into the gateway schema.
    ///
    /// Credentials are not part of the body; they travel as headers only.
    pub fn from_payload(payload: &'a DepositPayload, profile: &SolutionProfile) -> Self {
        let customer = &payload.customer;
        let details = &payload.details;

        Self {
            customer: WireCustomer {
                address_line_1: &customer.address_line1,
                city: &customer.city,
                country: &customer.country,
                email: &customer.email,
                first_name: &customer.first_name,
                last_name: &customer.last_name,
                mobile: &customer.mobile,
                state: &customer.state,
                zip: &customer.zip,
            },
            details: WireDetails {
                reference_no: &details.reference_no,
                redirect_url: &details.redirect_url,
                amount: details.amount,
                method: profile.method,
                currency: details.currency,
                receiving_currency: profile.receiving_currency,
                solution: profile.solution,
            },
        }
    }
}
