//! Transport abstraction
//!
//! The gateway core hands a fully serialized, signed form body to a
//! [`Transport`] and gets the raw reply body back. Everything below that
//! (connection pooling, TLS, timeouts) belongs to the transport.
//!
//! - [`HttpTransport`] - blocking HTTPS transport built on reqwest
//!
//! Tests substitute their own implementation to observe outgoing requests
//! without touching the network.

pub mod config;
pub mod http;

pub use config::HttpConfig;
pub use http::HttpTransport;

use crate::types::GatewayError;

/// Delivers a request body to a URL and returns the reply body
///
/// Implementations must be safe to share between threads: one gateway may
/// serve independent callers concurrently.
pub trait Transport: Send + Sync {
    /// POST a form-encoded body
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] when no reply was received and
    /// [`GatewayError::HttpStatus`] for non-success HTTP statuses.
    fn post(&self, url: &str, body: String) -> Result<String, GatewayError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, url: &str, body: String) -> Result<String, GatewayError> {
        (**self).post(url, body)
    }
}
