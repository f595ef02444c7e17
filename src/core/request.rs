//! DirectLink request field builders
//!
//! Each builder adds one group of fields to a request. Absent or blank
//! values are skipped, so a builder never overwrites a populated field with
//! nothing.

use crate::types::{Amount, CreditCard, PaymentSource, RequestFields, TransactionOptions};
use uuid::Uuid;

pub const PAY_ID: &str = "PAYID";
pub const OPERATION: &str = "Operation";
pub const SIGNATURE: &str = "SHASign";
pub const ORDER_ID: &str = "orderID";
pub const AMOUNT: &str = "amount";
pub const CURRENCY: &str = "currency";
pub const CARD_NUMBER: &str = "CARDNO";
pub const ALIAS: &str = "ALIAS";
pub const ALIAS_OPERATION: &str = "ALIASOPERATION";

/// ECI sent with card payments unless overridden
const CARD_ECI: &str = "7";
/// ECI sent with alias payments unless overridden
const ALIAS_ECI: &str = "9";

const ORDER_ID_LEN: usize = 30;

/// Random merchant order reference, 30 hex characters
pub fn generate_order_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ORDER_ID_LEN);
    id
}

pub fn add_invoice(fields: &mut RequestFields, options: &TransactionOptions) {
    let order_id = options.order_id.clone().unwrap_or_else(generate_order_id);
    fields.add_pair(ORDER_ID, Some(order_id));
    fields.add_pair("COM", options.description.as_deref());
}

pub fn add_payment_source(
    fields: &mut RequestFields,
    source: &PaymentSource,
    options: &TransactionOptions,
) {
    match source {
        PaymentSource::Alias(alias) => {
            add_alias(fields, Some(alias), None);
            add_eci(fields, options, ALIAS_ECI);
        }
        PaymentSource::Card(card) => {
            add_alias(fields, options.alias(), options.alias_operation.as_deref());
            add_eci(fields, options, CARD_ECI);
            if options.d3d {
                add_d3d(fields, options);
            }
            add_creditcard(fields, card);
        }
    }
}

fn add_alias(fields: &mut RequestFields, alias: Option<&str>, operation: Option<&str>) {
    fields.add_pair(ALIAS, alias);
    fields.add_pair(ALIAS_OPERATION, operation);
}

fn add_eci(fields: &mut RequestFields, options: &TransactionOptions, default: &str) {
    let eci = options
        .eci
        .map(|eci| eci.to_string())
        .unwrap_or_else(|| default.to_string());
    fields.add_pair("ECI", Some(eci));
}

fn add_d3d(fields: &mut RequestFields, options: &TransactionOptions) {
    fields.add_pair("FLAG3D", Some("Y"));
    fields.add_pair("WIN3DS", Some(options.win_3ds.unwrap_or_default().as_str()));
    fields.add_pair(
        "HTTP_ACCEPT",
        Some(options.http_accept.as_deref().unwrap_or("*/*")),
    );
    fields.add_pair("HTTP_USER_AGENT", options.http_user_agent.as_deref());
    fields.add_pair("ACCEPTURL", options.accept_url.as_deref());
    fields.add_pair("DECLINEURL", options.decline_url.as_deref());
    fields.add_pair("EXCEPTIONURL", options.exception_url.as_deref());
    fields.add_pair("LANGUAGE", options.language.as_deref());
}

fn add_creditcard(fields: &mut RequestFields, card: &CreditCard) {
    fields.add_pair("CN", Some(card.name()));
    fields.add_pair(CARD_NUMBER, Some(&card.number));
    fields.add_pair("ED", Some(card.expiry()));
    fields.add_pair("CVC", card.verification_value.as_deref());
}

/// Billing address fields; nothing is added without a billing address
pub fn add_address(fields: &mut RequestFields, options: &TransactionOptions) {
    let Some(address) = &options.billing_address else {
        return;
    };
    fields.add_pair("Owneraddress", address.address1.as_deref());
    fields.add_pair("OwnerZip", address.zip.as_deref());
    fields.add_pair("ownertown", address.city.as_deref());
    fields.add_pair("ownercty", address.country.as_deref());
    fields.add_pair("ownertelno", address.phone.as_deref());
}

pub fn add_customer_data(fields: &mut RequestFields, options: &TransactionOptions) {
    fields.add_pair("EMAIL", options.email.as_deref());
    fields.add_pair("REMOTE_ADDR", options.ip.as_deref());
}

pub fn add_money(fields: &mut RequestFields, amount: Amount, currency: &str) {
    fields.add_pair(CURRENCY, Some(currency));
    fields.add_pair(AMOUNT, Some(amount.to_string()));
}

pub fn add_authorization(fields: &mut RequestFields, reference: &str) {
    fields.add_pair(PAY_ID, Some(reference));
}
