//! Barclays ePDQ Extra Plus
//!
//! Barclays' API product is the Ogone DirectLink platform under its own
//! hostnames. Requests and replies are identical to Ogone's; only the
//! endpoints, the default currency and the store alias operation differ.
//!
//! # Account setup
//!
//! - The API user must be created with admin rights and flagged as a
//!   "special user for API".
//! - Alias storage must be enabled by Barclays support, with `ALIAS` added
//!   to the dynamic transaction feedback parameters.
//! - The hash algorithm selected in the back office must match
//!   `signature_encryptor`.

use super::{directlink_credentials, Endpoints};
use crate::config::{Credentials, Environment, GatewayConfig};
use crate::core::{Gateway, GatewayAdapter, GatewayProfile, OperationClass};
use crate::transport::HttpTransport;
use crate::types::{CardBrand, GatewayError};

pub const TEST_BASE_URL: &str = "https://mdepayments.epdq.co.uk/ncol/test";
pub const PRODUCTION_BASE_URL: &str = "https://payments.epdq.co.uk/ncol/prod";

static PROFILE: GatewayProfile = GatewayProfile {
    display_name: "Barclays ePDQ Extra Plus",
    homepage_url: "http://www.barclaycard.co.uk/business/accepting-payments/epdq-ecomm/extraplus/",
    supported_countries: &["GB"],
    supported_brands: &[
        CardBrand::Visa,
        CardBrand::Master,
        CardBrand::AmericanExpress,
        CardBrand::Jcb,
        CardBrand::Maestro,
    ],
    default_currency: "GBP",
    store_alias_operation: "BYPSP",
};

/// Barclays ePDQ Extra Plus adapter
#[derive(Debug, Clone)]
pub struct BarclaysExtraPlus {
    credentials: Credentials,
    endpoints: Endpoints,
}

impl BarclaysExtraPlus {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(
            credentials,
            Endpoints::new(TEST_BASE_URL, PRODUCTION_BASE_URL),
        )
    }

    /// Adapter pointed at non-standard hosts
    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Self {
        BarclaysExtraPlus {
            credentials,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl GatewayAdapter for BarclaysExtraPlus {
    fn profile(&self) -> &GatewayProfile {
        &PROFILE
    }

    fn endpoint(&self, environment: Environment, class: OperationClass) -> String {
        self.endpoints.resolve(environment, class)
    }

    fn credential_fields(&self) -> [(&'static str, &str); 3] {
        directlink_credentials(&self.credentials)
    }
}

/// Barclays ePDQ Extra Plus over HTTPS
pub type BarclaysExtraPlusGateway = Gateway<BarclaysExtraPlus, HttpTransport>;

impl Gateway<BarclaysExtraPlus, HttpTransport> {
    /// Build a Barclays gateway from configuration
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ogone_directlink::{BarclaysExtraPlusGateway, CreditCard, GatewayConfig, TransactionOptions};
    ///
    /// let gateway = BarclaysExtraPlusGateway::new(
    ///     GatewayConfig::new("pspid", "api-user", "password"),
    /// ).unwrap();
    /// let card = CreditCard::new("Longbob", "Longsen", "4111111111111111", 9, 2030);
    ///
    /// let response = gateway.purchase(100, &card.into(), &TransactionOptions::new()).unwrap();
    /// println!("{}: {}", response.success, response.message);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] for invalid configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Gateway::from_config(BarclaysExtraPlus::new(config.credentials()), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn adapter() -> BarclaysExtraPlus {
        BarclaysExtraPlus::new(Credentials::new("pspid", "api-user", "pw"))
    }

    #[rstest]
    #[case::test_order(
        Environment::Test,
        OperationClass::NewOrder,
        "https://mdepayments.epdq.co.uk/ncol/test/orderdirect.asp"
    )]
    #[case::test_maintenance(
        Environment::Test,
        OperationClass::Maintenance,
        "https://mdepayments.epdq.co.uk/ncol/test/maintenancedirect.asp"
    )]
    #[case::production_order(
        Environment::Production,
        OperationClass::NewOrder,
        "https://payments.epdq.co.uk/ncol/prod/orderdirect.asp"
    )]
    #[case::production_maintenance(
        Environment::Production,
        OperationClass::Maintenance,
        "https://payments.epdq.co.uk/ncol/prod/maintenancedirect.asp"
    )]
    fn test_endpoints(
        #[case] environment: Environment,
        #[case] class: OperationClass,
        #[case] expected: &str,
    ) {
        assert_eq!(adapter().endpoint(environment, class), expected);
    }

    #[test]
    fn test_credential_fields() {
        assert_eq!(
            adapter().credential_fields(),
            [("PSPID", "pspid"), ("USERID", "api-user"), ("PSWD", "pw")]
        );
    }

    #[test]
    fn test_profile() {
        let adapter = adapter();
        let profile = adapter.profile();
        assert_eq!(profile.default_currency, "GBP");
        assert_eq!(profile.store_alias_operation, "BYPSP");
        assert!(profile.supports_country("gb"));
        assert!(!profile.supports_country("FR"));
        assert!(profile.supports_brand(CardBrand::Maestro));
        assert!(!profile.supports_brand(CardBrand::Discover));
    }

    #[test]
    fn test_gateway_new_rejects_invalid_config() {
        let config = GatewayConfig::new("pspid", "api-user", "pw").with_currency("POUND");
        assert!(matches!(
            BarclaysExtraPlusGateway::new(config),
            Err(GatewayError::Configuration { .. })
        ));
    }
}
