//! Ogone DirectLink Gateway Client
//! # Overview
//!
//! This library provides a blocking client for Ogone DirectLink payment
//! gateways and the providers built on the same platform, such as Barclays
//! ePDQ Extra Plus.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (cards, amounts, options, responses, errors)
//! - [`config`] - Gateway configuration and TOML loading
//! - [`core`] - Provider-independent gateway logic:
//!   - [`core::gateway`] - Payment operations and the request/response cycle
//!   - [`core::codec`] - Body serialization and `SHASign` signing
//!   - [`core::parser`] - Reply parsing and message formatting
//!   - [`core::traits`] - The capability trait provider adapters implement
//! - [`adapters`] - Provider adapters (endpoints, credentials, provider facts)
//! - [`transport`] - Pluggable transport with a blocking HTTPS implementation
//!
//! # Operations
//!
//! - **Purchase**: Authorize and capture in one step
//! - **Authorize**: Reserve funds on a card or alias
//! - **Capture**: Collect a previous authorization
//! - **Void**: Cancel a previous authorization
//! - **Credit**: Refund against an earlier payment, or pay out without one
//! - **Store**: Tokenize a card by authorizing one minor unit and voiding it
//!
//! # Outcomes
//!
//! Provider declines and validation failures are returned as unsuccessful
//! [`Response`]s carrying the provider's message. Only failures to obtain or
//! read a reply are returned as [`GatewayError`]s.

pub mod adapters;
pub mod config;
pub mod core;
pub mod transport;
pub mod types;

pub use adapters::{BarclaysExtraPlus, BarclaysExtraPlusGateway, Endpoints, Ogone, OgoneGateway};
pub use config::{Credentials, Environment, GatewayConfig, SignatureEncryptor};
pub use crate::core::{Gateway, GatewayAdapter, GatewayProfile, Operation, OperationClass};
pub use transport::{HttpConfig, HttpTransport, Transport};
pub use types::{
    Address, Amount, Authorization, AvsCode, CardBrand, CreditCard, CreditTarget, CvvCode,
    GatewayError, PaymentSource, RequestFields, Response, ThreeDSecureWindow, TransactionOptions,
};
