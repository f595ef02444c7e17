//! Response types
//!
//! Every gateway operation yields a [`Response`], successful or not. The
//! authorization token it carries encodes the provider's payment id and the
//! DirectLink operation that produced it, so later captures, voids and
//! credits can target the same payment.

use indexmap::IndexMap;
use std::fmt;

/// Authorization token in `"<payid>;<action>"` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Authorization(String);

impl Authorization {
    /// Build a token from a payment id and the operation code that created it
    pub fn new(pay_id: Option<&str>, action: &str) -> Self {
        Authorization(format!("{};{}", pay_id.unwrap_or_default(), action))
    }

    /// Payment id part (text before the first `;`)
    pub fn reference(&self) -> &str {
        self.0.split(';').next().unwrap_or_default()
    }

    /// Operation code part, if present and non-empty
    pub fn action(&self) -> Option<&str> {
        self.0
            .split_once(';')
            .map(|(_, action)| action)
            .filter(|action| !action.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Authorization {
    fn from(token: &str) -> Self {
        Authorization(token.to_string())
    }
}

impl From<String> for Authorization {
    fn from(token: String) -> Self {
        Authorization(token)
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address verification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvsCode {
    /// Street address and postal code match
    Match,
    /// Street address and postal code do not match
    NoMatch,
    /// Verification system unavailable
    Unavailable,
}

impl AvsCode {
    /// Map the provider's `AAVCheck` value
    pub fn from_provider(value: &str) -> Option<Self> {
        match value {
            "OK" => Some(AvsCode::Match),
            "KO" => Some(AvsCode::NoMatch),
            "NO" => Some(AvsCode::Unavailable),
            _ => None,
        }
    }

    /// Standard single-letter AVS code
    pub fn code(self) -> char {
        match self {
            AvsCode::Match => 'M',
            AvsCode::NoMatch => 'N',
            AvsCode::Unavailable => 'R',
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AvsCode::Match => "Street address and postal code match.",
            AvsCode::NoMatch => "Street address and postal code do not match.",
            AvsCode::Unavailable => "System unavailable.",
        }
    }
}

/// Card verification value outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvvCode {
    Match,
    NoMatch,
    NotProcessed,
}

impl CvvCode {
    /// Map the provider's `CVCCheck` value
    pub fn from_provider(value: &str) -> Option<Self> {
        match value {
            "OK" => Some(CvvCode::Match),
            "KO" => Some(CvvCode::NoMatch),
            "NO" => Some(CvvCode::NotProcessed),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            CvvCode::Match => 'M',
            CvvCode::NoMatch => 'N',
            CvvCode::NotProcessed => 'P',
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CvvCode::Match => "Match",
            CvvCode::NoMatch => "No Match",
            CvvCode::NotProcessed => "Not Processed",
        }
    }
}

/// Uniform result of a gateway operation
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Whether the provider accepted the request
    pub success: bool,
    /// Human readable outcome, taken from the provider on failure
    pub message: String,
    /// Raw reply fields, in the order the provider sent them
    pub params: IndexMap<String, String>,
    /// Token for follow-up operations on the same payment
    pub authorization: Authorization,
    /// Whether the request went to the provider's test environment
    pub test: bool,
    pub avs_result: Option<AvsCode>,
    pub cvv_result: Option<CvvCode>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Merchant order id echoed by the provider
    pub fn order_id(&self) -> Option<&str> {
        self.param("orderID")
    }

    /// Alias of the stored card, when the provider created or updated one
    pub fn billing_id(&self) -> Option<&str> {
        self.param("ALIAS")
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
