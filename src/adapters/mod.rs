//! Provider adapters
//!
//! Each adapter is an immutable value built at construction: credentials
//! plus an [`Endpoints`] table. Adapters never share or mutate URL tables.
//!
//! - [`BarclaysExtraPlus`] - Barclays ePDQ Extra Plus (DirectLink API)
//! - [`Ogone`] - stock Ogone DirectLink

pub mod barclays_extra_plus;
pub mod ogone;

pub use barclays_extra_plus::{BarclaysExtraPlus, BarclaysExtraPlusGateway};
pub use ogone::{Ogone, OgoneGateway};

use crate::config::{Credentials, Environment};
use crate::core::OperationClass;

pub const ORDER_PATH: &str = "/orderdirect.asp";
pub const MAINTENANCE_PATH: &str = "/maintenancedirect.asp";

/// URL table of a DirectLink provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    test_base: String,
    production_base: String,
    order_path: String,
    maintenance_path: String,
}

impl Endpoints {
    /// Table with the standard DirectLink paths under the given base URLs
    pub fn new(test_base: impl Into<String>, production_base: impl Into<String>) -> Self {
        Endpoints {
            test_base: test_base.into(),
            production_base: production_base.into(),
            order_path: ORDER_PATH.to_string(),
            maintenance_path: MAINTENANCE_PATH.to_string(),
        }
    }

    /// Same base URL for both environments, e.g. a local stand-in
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Endpoints::new(base.clone(), base)
    }

    pub fn base(&self, environment: Environment) -> &str {
        match environment {
            Environment::Test => &self.test_base,
            Environment::Production => &self.production_base,
        }
    }

    pub fn path(&self, class: OperationClass) -> &str {
        match class {
            OperationClass::NewOrder => &self.order_path,
            OperationClass::Maintenance => &self.maintenance_path,
        }
    }

    /// `base(environment) + path(class)`
    pub fn resolve(&self, environment: Environment, class: OperationClass) -> String {
        format!("{}{}", self.base(environment), self.path(class))
    }
}

/// `PSPID`/`USERID`/`PSWD` fields shared by DirectLink providers
pub(crate) fn directlink_credentials(credentials: &Credentials) -> [(&'static str, &str); 3] {
    [
        ("PSPID", credentials.login.as_str()),
        ("USERID", credentials.user.as_str()),
        ("PSWD", credentials.password.as_str()),
    ]
}
