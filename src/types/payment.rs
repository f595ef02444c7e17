//! Payment source types
//!
//! A payment is made either with a full card or with an alias the provider
//! issued for a previously stored card. Credits additionally accept a
//! reference to an earlier payment.

use super::response::Authorization;
use serde::Deserialize;
use std::fmt;

/// Card brands known to DirectLink providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Master,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
    Maestro,
}

impl CardBrand {
    /// Detect the brand from a card number's prefix and length
    ///
    /// Non-digit characters (spaces, dashes) are ignored. Returns `None` for
    /// numbers that match no known brand.
    pub fn detect(number: &str) -> Option<CardBrand> {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        let len = digits.len();
        let prefix = |n: usize| digits.get(..n).and_then(|p| p.parse::<u32>().ok());

        if digits.starts_with('4') && matches!(len, 13 | 16 | 19) {
            return Some(CardBrand::Visa);
        }
        if len == 16 {
            if let Some(p2) = prefix(2) {
                if (51..=55).contains(&p2) {
                    return Some(CardBrand::Master);
                }
            }
            if let Some(p4) = prefix(4) {
                if (2221..=2720).contains(&p4) {
                    return Some(CardBrand::Master);
                }
                if p4 == 6011 || (6440..=6599).contains(&p4) {
                    return Some(CardBrand::Discover);
                }
                if (3528..=3589).contains(&p4) {
                    return Some(CardBrand::Jcb);
                }
            }
        }
        if len == 15 && (digits.starts_with("34") || digits.starts_with("37")) {
            return Some(CardBrand::AmericanExpress);
        }
        if len == 14 {
            if let Some(p3) = prefix(3) {
                if (300..=305).contains(&p3) || digits.starts_with("36") || digits.starts_with("38")
                {
                    return Some(CardBrand::DinersClub);
                }
            }
        }
        if (12..=19).contains(&len) {
            if let Some(p2) = prefix(2) {
                if matches!(p2, 50 | 56 | 57 | 58) || (60..=69).contains(&p2) {
                    return Some(CardBrand::Maestro);
                }
            }
        }
        None
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardBrand::Visa => "visa",
            CardBrand::Master => "master",
            CardBrand::AmericanExpress => "american_express",
            CardBrand::DinersClub => "diners_club",
            CardBrand::Discover => "discover",
            CardBrand::Jcb => "jcb",
            CardBrand::Maestro => "maestro",
        };
        f.write_str(name)
    }
}

/// Card details submitted with a new order
///
/// `Debug` masks everything but the last four digits of the number and
/// omits the verification value.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCard {
    pub first_name: String,
    pub last_name: String,
    pub number: String,
    /// Expiry month, 1-12
    pub month: u8,
    /// Four-digit expiry year
    pub year: u16,
    pub verification_value: Option<String>,
    /// Explicit brand; detected from the number when `None`
    pub brand: Option<CardBrand>,
}

impl CreditCard {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        number: impl Into<String>,
        month: u8,
        year: u16,
    ) -> Self {
        CreditCard {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: number.into(),
            month,
            year,
            verification_value: None,
            brand: None,
        }
    }

    pub fn with_verification_value(mut self, value: impl Into<String>) -> Self {
        self.verification_value = Some(value.into());
        self
    }

    pub fn with_brand(mut self, brand: CardBrand) -> Self {
        self.brand = Some(brand);
        self
    }

    /// Cardholder name as printed on the card
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Explicit brand, or the brand detected from the number
    pub fn brand(&self) -> Option<CardBrand> {
        self.brand.or_else(|| CardBrand::detect(&self.number))
    }

    /// Expiry date in `MMYY` form
    pub fn expiry(&self) -> String {
        format!("{:02}{:02}", self.month, self.year % 100)
    }

    fn last_digits(&self) -> &str {
        let start = self.number.len().saturating_sub(4);
        self.number.get(start..).unwrap_or_default()
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("name", &self.name())
            .field("number", &format_args!("XXXX-{}", self.last_digits()))
            .field("month", &self.month)
            .field("year", &self.year)
            .field("brand", &self.brand())
            .finish()
    }
}

/// What a purchase, authorization or store charges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentSource {
    Card(CreditCard),
    /// Alias of a card stored with the provider
    Alias(String),
}

impl From<CreditCard> for PaymentSource {
    fn from(card: CreditCard) -> Self {
        PaymentSource::Card(card)
    }
}

impl From<&str> for PaymentSource {
    fn from(alias: &str) -> Self {
        PaymentSource::Alias(alias.to_string())
    }
}

/// What a credit refunds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreditTarget {
    /// Refund against an earlier payment
    Reference(Authorization),
    /// Unreferenced credit straight to a card or alias
    Source(PaymentSource),
}

impl CreditTarget {
    /// Classify a textual identifier
    ///
    /// `"<payid>;<action>"` with a non-empty action is a reference; anything
    /// else is treated as an alias.
    pub fn from_identifier(identifier: &str) -> Self {
        let authorization = Authorization::from(identifier);
        if authorization.action().is_some() {
            CreditTarget::Reference(authorization)
        } else {
            CreditTarget::Source(PaymentSource::Alias(identifier.to_string()))
        }
    }
}

impl From<Authorization> for CreditTarget {
    fn from(authorization: Authorization) -> Self {
        CreditTarget::Reference(authorization)
    }
}

impl From<CreditCard> for CreditTarget {
    fn from(card: CreditCard) -> Self {
        CreditTarget::Source(PaymentSource::Card(card))
    }
}

/// Billing address sent with new orders
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    pub name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country: Option<String>,
    pub phone: Option<String>,
}
