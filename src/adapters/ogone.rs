//! Ogone DirectLink

use super::{directlink_credentials, Endpoints};
use crate::config::{Credentials, Environment, GatewayConfig};
use crate::core::{Gateway, GatewayAdapter, GatewayProfile, OperationClass};
use crate::transport::HttpTransport;
use crate::types::{CardBrand, GatewayError};

pub const TEST_BASE_URL: &str = "https://secure.ogone.com/ncol/test";
pub const PRODUCTION_BASE_URL: &str = "https://secure.ogone.com/ncol/prod";

static PROFILE: GatewayProfile = GatewayProfile {
    display_name: "Ogone",
    homepage_url: "http://www.ogone.com/",
    supported_countries: &["BE", "DE", "FR", "NL", "AT", "CH"],
    supported_brands: &[
        CardBrand::Visa,
        CardBrand::Master,
        CardBrand::AmericanExpress,
        CardBrand::DinersClub,
        CardBrand::Discover,
        CardBrand::Jcb,
        CardBrand::Maestro,
    ],
    default_currency: "EUR",
    store_alias_operation: "BYOGONE",
};

#[derive(Debug, Clone)]
pub struct Ogone {
    credentials: Credentials,
    endpoints: Endpoints,
}

impl Ogone {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(credentials, Endpoints::new(TEST_BASE_URL, PRODUCTION_BASE_URL))
    }

    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Self {
        Ogone {
            credentials,
            endpoints,
        }
    }
}

impl GatewayAdapter for Ogone {
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

pub type OgoneGateway = Gateway<Ogone, HttpTransport>;

impl Gateway<Ogone, HttpTransport> {
    /// Build an Ogone gateway from configuration
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] for invalid configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Gateway::from_config(Ogone::new(config.credentials()), &config)
    }
}
