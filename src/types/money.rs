//! Money-related types
//!
//! DirectLink expects amounts as an integer count of minor units (cents,
//! pence) with the currency sent separately as an ISO 4217 code.

use super::error::GatewayError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Amount expressed in minor currency units
///
/// `Amount::from_minor(100)` is one pound in GBP, one euro in EUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from a count of minor units
    pub const fn from_minor(minor: u64) -> Self {
        Amount(minor)
    }

    /// Create an amount from a decimal value in major units
    ///
    /// `12.34` becomes `1234` minor units. Trailing zeros beyond two places
    /// are accepted (`1.500` is fine).
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidAmount`] if:
    /// - The value is negative
    /// - The value has precision finer than one minor unit
    /// - The value does not fit in a `u64` count of minor units
    pub fn from_major(value: Decimal) -> Result<Self, GatewayError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(GatewayError::invalid_amount(value, "must not be negative"));
        }

        let minor = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| GatewayError::invalid_amount(value, "too large"))?;

        if minor.fract() != Decimal::ZERO {
            return Err(GatewayError::invalid_amount(
                value,
                "precision finer than one minor unit",
            ));
        }

        minor
            .to_u64()
            .map(Amount)
            .ok_or_else(|| GatewayError::invalid_amount(value, "too large"))
    }

    /// Count of minor units
    pub const fn minor_units(self) -> u64 {
        self.0
    }
}

impl From<u64> for Amount {
    fn from(minor: u64) -> Self {
        Amount(minor)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
