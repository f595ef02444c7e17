//! Gateway configuration
//!
//! Construction-time settings for a gateway: merchant credentials, target
//! environment, request signing and transport tuning. Configuration is
//! immutable once a gateway is built.
//!
//! # Examples
//!
//! ```toml
//! login = "merchant-pspid"
//! user = "api-user"
//! password = "secret"
//! environment = "test"
//! signature = "sha-in-passphrase"
//! signature_encryptor = "sha256"
//! currency = "GBP"
//!
//! [http]
//! timeout_secs = 60
//! ```

use crate::transport::HttpConfig;
use crate::types::GatewayError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Provider environment requests are sent to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Test,
    Production,
}

impl Environment {
    pub fn is_test(self) -> bool {
        self == Environment::Test
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Test => f.write_str("test"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Hash algorithm used for the `SHASign` request signature
///
/// Must match the algorithm selected in the merchant back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureEncryptor {
    /// Send requests unsigned without warning
    None,
    Sha1,
    Sha256,
    Sha512,
}

/// Merchant credentials sent with every request
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Merchant account id (PSPID)
    pub login: String,
    /// API user id
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        login: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Credentials {
            login: login.into(),
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Full gateway configuration
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub environment: Environment,

    /// SHA-IN passphrase; requests are unsigned when absent
    #[serde(default)]
    pub signature: Option<String>,

    /// Signature algorithm; legacy SHA-1 field list when absent
    #[serde(default)]
    pub signature_encryptor: Option<SignatureEncryptor>,

    /// Default currency; falls back to the provider's default
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub http: HttpConfig,
}

impl GatewayConfig {
    /// Create a test-environment configuration with the given credentials
    pub fn new(
        login: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        GatewayConfig {
            login: login.into(),
            user: user.into(),
            password: password.into(),
            environment: Environment::Test,
            signature: None,
            signature_encryptor: None,
            currency: None,
            http: HttpConfig::default(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_signature(
        mut self,
        passphrase: impl Into<String>,
        encryptor: Option<SignatureEncryptor>,
    ) -> Self {
        self.signature = Some(passphrase.into());
        self.signature_encryptor = encryptor;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] if the text is not valid TOML,
    /// names an unknown environment or signature algorithm, or fails
    /// [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, GatewayError> {
        let config: GatewayConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check values that serde cannot
    ///
    /// Credentials are deliberately not checked: blank credentials are sent
    /// as-is and rejected by the provider.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] if the currency is not a
    /// three-letter code or the HTTP timeouts are out of range.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if let Some(currency) = &self.currency {
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(GatewayError::configuration(format!(
                    "currency must be a three-letter ISO 4217 code, got '{}'",
                    currency
                )));
            }
        }
        self.http.validate()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.login, &self.user, &self.password)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("login", &self.login)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .field("signature_encryptor", &self.signature_encryptor)
            .field("currency", &self.currency)
            .field("http", &self.http)
            .finish()
    }
}
