use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Signature error: {message}")]
    Signature { message: String },

    #[error("Invalid header value for {header}")]
    InvalidHeader { header: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown environment: {name}")]
    UnknownEnvironment { name: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GatewayError {
    pub fn signature(message: impl Into<String>) -> Self {
        Self::Signature {
            message: message.into(),
        }
    }

    pub fn invalid_header(header: &'static str) -> Self {
        Self::InvalidHeader { header }
    }

    pub fn unknown_environment(name: impl Into<String>) -> Self {
        Self::UnknownEnvironment { name: name.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the failure happened on the wire rather than while preparing the request.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_timeout(),
            _ => false,
        }
    }
}
