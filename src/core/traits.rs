//! Provider capability trait
//!
//! A provider adapter only knows where to send requests, how to
//! authenticate them, and a handful of static facts about the provider.
//! Everything else (field building, signing, parsing, flow composition)
//! lives in [`Gateway`](crate::core::Gateway) and is shared by all adapters.

use crate::config::Environment;
use crate::core::request::PAY_ID;
use crate::types::{CardBrand, RequestFields};

/// Kind of endpoint a request goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationClass {
    /// Creates a new payment
    NewOrder,
    /// Acts on an existing payment (capture, void, referenced credit)
    Maintenance,
}

impl OperationClass {
    /// Classify outgoing fields
    ///
    /// Depends only on whether a non-blank payment id is present, never on
    /// the operation code.
    pub fn for_fields(fields: &RequestFields) -> Self {
        if fields.has_value(PAY_ID) {
            OperationClass::Maintenance
        } else {
            OperationClass::NewOrder
        }
    }
}

/// Static facts about a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayProfile {
    pub display_name: &'static str,
    pub homepage_url: &'static str,
    /// ISO 3166-1 alpha-2 codes of merchant countries supported
    pub supported_countries: &'static [&'static str],
    pub supported_brands: &'static [CardBrand],
    /// Currency used when neither the request nor the configuration sets one
    pub default_currency: &'static str,
    /// `ALIASOPERATION` sent by `store` when the caller names no alias
    pub store_alias_operation: &'static str,
}

impl GatewayProfile {
    pub fn supports_brand(&self, brand: CardBrand) -> bool {
        self.supported_brands.contains(&brand)
    }

    pub fn supports_country(&self, country: &str) -> bool {
        self.supported_countries
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country))
    }
}

/// Provider-specific half of a gateway
///
/// Implementations are immutable after construction and shared across
/// threads by the gateway.
pub trait GatewayAdapter: Send + Sync {
    /// Static provider facts
    fn profile(&self) -> &GatewayProfile;

    /// Full URL for the given environment and endpoint kind
    fn endpoint(&self, environment: Environment, class: OperationClass) -> String;

    /// Authentication fields added to every request
    fn credential_fields(&self) -> [(&'static str, &str); 3];
}
