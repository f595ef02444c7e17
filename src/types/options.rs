//! Per-transaction options
//!
//! Everything a caller may attach to a single operation besides the amount
//! and the payment source. All fields are optional; unset fields are simply
//! not sent.

use super::payment::Address;
use serde::Deserialize;

/// Window the 3-D Secure challenge is displayed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreeDSecureWindow {
    #[default]
    MainWindow,
    PopUp,
    PopIx,
}

impl ThreeDSecureWindow {
    /// DirectLink `WIN3DS` value
    pub fn as_str(self) -> &'static str {
        match self {
            ThreeDSecureWindow::MainWindow => "MAINW",
            ThreeDSecureWindow::PopUp => "POPUP",
            ThreeDSecureWindow::PopIx => "POPIX",
        }
    }
}

/// Options accepted by every gateway operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionOptions {
    /// Merchant order reference; generated when absent
    pub order_id: Option<String>,
    pub description: Option<String>,
    /// ISO 4217 code; overrides the gateway's configured currency
    pub currency: Option<String>,
    pub billing_address: Option<Address>,
    pub email: Option<String>,
    /// Customer IP address
    pub ip: Option<String>,
    /// Electronic commerce indicator
    pub eci: Option<u8>,

    /// Alias to create, update or charge
    pub billing_id: Option<String>,
    /// Alias to store the card under, when `billing_id` is not given
    pub store: Option<String>,
    /// How the provider should handle the alias (`BYPSP`, `BYOGONE`, ...)
    pub alias_operation: Option<String>,

    /// Request 3-D Secure authentication
    pub d3d: bool,
    pub win_3ds: Option<ThreeDSecureWindow>,
    pub http_accept: Option<String>,
    pub http_user_agent: Option<String>,
    pub accept_url: Option<String>,
    pub decline_url: Option<String>,
    pub exception_url: Option<String>,
    pub language: Option<String>,
}

impl TransactionOptions {
    pub fn new() -> Self {
        TransactionOptions::default()
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_billing_address(mut self, address: Address) -> Self {
        self.billing_address = Some(address);
        self
    }

    pub fn with_eci(mut self, eci: u8) -> Self {
        self.eci = Some(eci);
        self
    }

    pub fn with_billing_id(mut self, billing_id: impl Into<String>) -> Self {
        self.billing_id = Some(billing_id.into());
        self
    }

    pub fn with_store(mut self, alias: impl Into<String>) -> Self {
        self.store = Some(alias.into());
        self
    }

    pub fn with_d3d(mut self) -> Self {
        self.d3d = true;
        self
    }

    /// Alias to send with card payments: `billing_id`, else `store`
    pub fn alias(&self) -> Option<&str> {
        self.billing_id.as_deref().or(self.store.as_deref())
    }
}
