//! Core gateway module
//!
//! This module contains the provider-independent gateway components:
//! - `traits` - Provider capability trait and endpoint classification
//! - `gateway` - Payment operations and the request/response cycle
//! - `request` - DirectLink request field builders
//! - `codec` - Body serialization and request signing
//! - `parser` - Reply parsing and message formatting

pub mod codec;
pub mod gateway;
pub mod parser;
pub mod request;
pub mod traits;

#[cfg(test)]
pub(crate) mod scripted_transport;

pub use codec::RequestSigner;
pub use gateway::{Gateway, Operation};
pub use traits::{GatewayAdapter, GatewayProfile, OperationClass};
