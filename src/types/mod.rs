//! Types module
//!
//! Contains core data structures used throughout the library.
//! This module organizes types into logical submodules:
//! - `money`: Amounts in minor units
//! - `payment`: Cards, aliases, credit targets and addresses
//! - `options`: Per-transaction options
//! - `fields`: Outgoing request fields
//! - `response`: Responses and authorization tokens
//! - `error`: Error types for the gateway client

pub mod error;
pub mod fields;
pub mod money;
pub mod options;
pub mod payment;
pub mod response;

pub use error::GatewayError;
pub use fields::RequestFields;
pub use money::Amount;
pub use options::{ThreeDSecureWindow, TransactionOptions};
pub use payment::{Address, CardBrand, CreditCard, CreditTarget, PaymentSource};
pub use response::{Authorization, AvsCode, CvvCode, Response};
