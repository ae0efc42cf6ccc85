use crate::error::{GatewayError, GatewayResult};
use crate::payments::client::ClientOptions;
use crate::payments::environment::Environment;
use crate::payments::providers::{BankTransferClient, CardClient, EWalletClient};
use crate::payments::traits::DepositGateway;
use crate::payments::types::Credentials;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which payment solution a configured gateway dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolutionKind {
    #[default]
    BankTransfer,
    EWallet,
    Card,
}

impl FromStr for SolutionKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> GatewayResult<Self> {
        match s {
            "bank_transfer" | "jpay" => Ok(SolutionKind::BankTransfer),
            "e_wallet" | "gcash" => Ok(SolutionKind::EWallet),
            "card" | "dixonpay" => Ok(SolutionKind::Card),
            other => Err(GatewayError::configuration(format!(
                "PAYSTAGE_SOLUTION must be one of bank_transfer, e_wallet, card, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub environment: Environment,
    pub solution: SolutionKind,
    pub timeout_secs: u64,
    /// Only needed by callers that do not supply credentials per payload
    pub credentials: Option<Credentials>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Develop,
            solution: SolutionKind::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credentials: None,
        }
    }
}

impl GatewayConfig {
    /// Create config from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> GatewayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("PAYSTAGE_BASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Environment::Custom(url),
            None => Environment::resolve(
                &lookup("PAYSTAGE_ENV").unwrap_or_else(|| "develop".to_string()),
            ),
        };

        let solution = match lookup("PAYSTAGE_SOLUTION") {
            Some(name) => name.parse()?,
            None => SolutionKind::default(),
        };

        let timeout_secs = match lookup("PAYSTAGE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                GatewayError::configuration(format!(
                    "PAYSTAGE_TIMEOUT_SECS must be a valid number, got {}",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let credentials = match (lookup("PAYSTAGE_PUBLIC_KEY"), lookup("PAYSTAGE_SECRET_KEY")) {
            (Some(public_key), Some(secret_key)) => Some(Credentials::new(public_key, secret_key)),
            (None, None) => None,
            _ => {
                return Err(GatewayError::configuration(
                    "PAYSTAGE_PUBLIC_KEY and PAYSTAGE_SECRET_KEY must be set together",
                ))
            }
        };

        let config = Self {
            environment,
            solution,
            timeout_secs,
            credentials,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GatewayResult<()> {
        if self.timeout_secs == 0 {
            return Err(GatewayError::configuration(
                "PAYSTAGE_TIMEOUT_SECS must be greater than 0",
            ));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.public_key.trim().is_empty() {
                return Err(GatewayError::configuration(
                    "PAYSTAGE_PUBLIC_KEY cannot be empty",
                ));
            }
            if credentials.secret_key.trim().is_empty() {
                return Err(GatewayError::configuration(
                    "PAYSTAGE_SECRET_KEY cannot be empty",
                ));
            }
        }

        Ok(())
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Client for the configured solution and environment
    pub fn gateway(&self) -> Box<dyn DepositGateway> {
        let environment = self.environment.clone();
        let options = self.client_options();
        match self.solution {
            SolutionKind::BankTransfer => Box::new(
                BankTransferClient::with_environment(environment).with_options(options),
            ),
            SolutionKind::EWallet => {
                Box::new(EWalletClient::with_environment(environment).with_options(options))
            }
            SolutionKind::Card => {
                Box::new(CardClient::with_environment(environment).with_options(options))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::types::TransactionMethod;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.environment, Environment::Develop);
        assert_eq!(config.solution, SolutionKind::BankTransfer);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_full_configuration() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("PAYSTAGE_ENV", "production"),
            ("PAYSTAGE_SOLUTION", "e_wallet"),
            ("PAYSTAGE_TIMEOUT_SECS", "12"),
            ("PAYSTAGE_PUBLIC_KEY", "pk_live"),
            ("PAYSTAGE_SECRET_KEY", "sk_live"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.solution, SolutionKind::EWallet);
        assert_eq!(
            config.client_options().timeout,
            Some(Duration::from_secs(12))
        );
        assert_eq!(
            config.credentials,
            Some(Credentials::new("pk_live", "sk_live"))
        );

        let gateway = config.gateway();
        assert_eq!(gateway.environment(), &Environment::Production);
        assert_eq!(gateway.profile().method, TransactionMethod::EWallet);
    }

    #[test]
    fn test_base_url_overrides_environment() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("PAYSTAGE_ENV", "staging"),
            ("PAYSTAGE_BASE_URL", "http://127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(
            config.environment,
            Environment::Custom("http://127.0.0.1:9000".to_string())
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(GatewayConfig::from_lookup(lookup(&[("PAYSTAGE_TIMEOUT_SECS", "0")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[("PAYSTAGE_TIMEOUT_SECS", "soon")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[("PAYSTAGE_SOLUTION", "crypto")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[("PAYSTAGE_PUBLIC_KEY", "pk")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[
            ("PAYSTAGE_PUBLIC_KEY", "pk"),
            ("PAYSTAGE_SECRET_KEY", " "),
        ]))
        .is_err());
    }

    #[test]
    fn test_solution_aliases() {
        assert_eq!("jpay".parse::<SolutionKind>().unwrap(), SolutionKind::BankTransfer);
        assert_eq!("dixonpay".parse::<SolutionKind>().unwrap(), SolutionKind::Card);
        assert_eq!("card".parse::<SolutionKind>().unwrap(), SolutionKind::Card);
    }
}
