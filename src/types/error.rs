//! Error types for the DirectLink gateway client
//!
//! This module defines the errors a gateway operation can return to its caller.
//! Provider-side declines and validation failures are NOT errors: they come back
//! as an unsuccessful [`Response`](crate::types::Response) carrying the
//! provider's message.
//!
//! # Error Categories
//!
//! - **Transport Errors**: connection refused, TLS failure, timeouts, non-2xx statuses
//! - **Parse Errors**: the provider answered with something that is not a DirectLink reply
//! - **Input Errors**: amounts that cannot be expressed in minor units
//! - **Configuration Errors**: invalid or unreadable gateway configuration

use thiserror::Error;

/// Main error type for the gateway client
///
/// Each variant carries enough context to diagnose the failure without
/// exposing credentials or card data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The request could not be delivered or no reply was received
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The provider answered with a non-success HTTP status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Endpoint that answered
        url: String,
    },

    /// The reply body could not be parsed
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parsing error
        message: String,
    },

    /// The amount cannot be sent to the provider
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The rejected amount, as supplied
        amount: String,
        /// Why it was rejected
        reason: String,
    },

    /// The gateway configuration is invalid
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Description of the configuration problem
        message: String,
    },

    /// I/O error while reading configuration
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for GatewayError {
    fn from(error: std::io::Error) -> Self {
        GatewayError::Io {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => GatewayError::HttpStatus {
                status: status.as_u16(),
                url: error.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => GatewayError::Transport {
                message: error.to_string(),
            },
        }
    }
}

impl From<quick_xml::Error> for GatewayError {
    fn from(error: quick_xml::Error) -> Self {
        GatewayError::Parse {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for GatewayError {
    fn from(error: toml::de::Error) -> Self {
        GatewayError::Configuration {
            message: error.message().to_string(),
        }
    }
}

impl GatewayError {
    /// Create a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport {
            message: message.into(),
        }
    }

    /// Create an HttpStatus error
    pub fn http_status(status: u16, url: &str) -> Self {
        GatewayError::HttpStatus {
            status,
            url: url.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        GatewayError::Parse {
            message: message.into(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl ToString, reason: &str) -> Self {
        GatewayError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        GatewayError::Configuration {
            message: message.into(),
        }
    }
}
