//! Gateway operations
//!
//! This module provides the [`Gateway`] that maps provider-agnostic payment
//! operations onto DirectLink requests. A provider adapter supplies the
//! endpoints and credentials; a transport delivers the bytes.
//!
//! The gateway enforces the following rules:
//! - Credential fields are written exactly once on every request
//! - The endpoint depends only on whether the request names an existing payment
//! - `store` reports the authorize outcome, never the void outcome

use crate::config::{Environment, GatewayConfig};
use crate::core::codec::{self, RequestSigner};
use crate::core::parser;
use crate::core::request::{self, PAY_ID};
use crate::core::traits::{GatewayAdapter, OperationClass};
use crate::transport::{HttpTransport, Transport};
use crate::types::{
    Amount, Authorization, CardBrand, CreditTarget, GatewayError, PaymentSource, RequestFields,
    Response, TransactionOptions,
};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// DirectLink operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Authorize and capture in one step; also used to capture a reservation
    Sale,
    /// Authorize only
    Reservation,
    /// Pre-authorization, used for MasterCard authorizations
    PreAuthorization,
    /// Cancel an authorization
    Deletion,
    /// Refund
    Refund,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Sale => "SAL",
            Operation::Reservation => "RES",
            Operation::PreAuthorization => "PAU",
            Operation::Deletion => "DES",
            Operation::Refund => "RFD",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment gateway client
///
/// Cheap to share: all state is immutable after construction, so one
/// gateway can serve concurrent callers (`Gateway` is `Send + Sync` when its
/// adapter and transport are).
pub struct Gateway<A, T = HttpTransport> {
    adapter: A,
    transport: T,
    environment: Environment,
    currency: Option<String>,
    signer: RequestSigner,
}

impl<A: GatewayAdapter> Gateway<A, HttpTransport> {
    /// Create a gateway that talks HTTPS with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] if the configuration is invalid
    /// or [`GatewayError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(adapter: A, config: &GatewayConfig) -> Result<Self, GatewayError> {
        let transport = HttpTransport::with_config(&config.http)?;
        Self::with_transport(adapter, transport, config)
    }
}

impl<A: GatewayAdapter, T: Transport> Gateway<A, T> {
    /// Create a gateway with a caller-supplied transport
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] if the configuration is invalid.
    pub fn with_transport(
        adapter: A,
        transport: T,
        config: &GatewayConfig,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        let signer = RequestSigner::new(config.signature.as_deref(), config.signature_encryptor);
        if signer.is_implicitly_unsigned() {
            warn!(
                gateway = adapter.profile().display_name,
                "no signature passphrase configured; requests will be sent unsigned"
            );
        }

        Ok(Gateway {
            adapter,
            transport,
            environment: config.environment,
            currency: config.currency.clone(),
            signer,
        })
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Whether requests go to the provider's test environment
    pub fn is_test(&self) -> bool {
        self.environment.is_test()
    }

    /// Authorize and capture in one step
    ///
    /// # Errors
    ///
    /// Returns an error only when no provider reply could be obtained or
    /// parsed; declines come back as an unsuccessful [`Response`].
    pub fn purchase(
        &self,
        amount: impl Into<Amount>,
        source: &PaymentSource,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let fields = self.new_order_fields(amount.into(), source, options);
        self.commit(Operation::Sale, fields)
    }

    /// Reserve funds without capturing them
    ///
    /// MasterCard cards are pre-authorized (`PAU`), everything else reserved
    /// (`RES`).
    ///
    /// # Errors
    ///
    /// As [`purchase`](Self::purchase).
    pub fn authorize(
        &self,
        amount: impl Into<Amount>,
        source: &PaymentSource,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let action = match source {
            PaymentSource::Card(card) if card.brand() == Some(CardBrand::Master) => {
                Operation::PreAuthorization
            }
            _ => Operation::Reservation,
        };
        let fields = self.new_order_fields(amount.into(), source, options);
        self.commit(action, fields)
    }

    /// Capture a previous authorization
    ///
    /// A blank authorization sends no payment id, so the request goes to the
    /// new-order endpoint and the provider rejects it.
    ///
    /// # Errors
    ///
    /// As [`purchase`](Self::purchase).
    pub fn capture(
        &self,
        amount: impl Into<Amount>,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let mut fields = RequestFields::new();
        request::add_authorization(&mut fields, Authorization::from(authorization).reference());
        request::add_invoice(&mut fields, options);
        request::add_customer_data(&mut fields, options);
        request::add_money(&mut fields, amount.into(), self.currency_for(options));
        self.commit(Operation::Sale, fields)
    }

    /// Cancel a previous authorization
    ///
    /// # Errors
    ///
    /// As [`purchase`](Self::purchase).
    pub fn void(&self, authorization: &str) -> Result<Response, GatewayError> {
        let mut fields = RequestFields::new();
        request::add_authorization(&mut fields, Authorization::from(authorization).reference());
        self.commit(Operation::Deletion, fields)
    }

    /// Refund money
    ///
    /// A [`CreditTarget::Reference`] refunds against an earlier payment; a
    /// [`CreditTarget::Source`] pays out to a card or alias without one.
    ///
    /// # Errors
    ///
    /// As [`purchase`](Self::purchase).
    pub fn credit(
        &self,
        amount: impl Into<Amount>,
        target: &CreditTarget,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let amount = amount.into();
        let fields = match target {
            CreditTarget::Reference(authorization) => {
                let mut fields = RequestFields::new();
                request::add_authorization(&mut fields, authorization.reference());
                request::add_money(&mut fields, amount, self.currency_for(options));
                fields
            }
            CreditTarget::Source(source) => self.new_order_fields(amount, source, options),
        };
        self.commit(Operation::Refund, fields)
    }

    /// Tokenize a payment source without charging it
    ///
    /// Authorizes one minor unit and, if that succeeds, voids it straight
    /// away. Returns the authorize response; its `billing_id()` is the
    /// alias. When the caller names no alias (`billing_id` or `store`), the
    /// provider is asked to generate one.
    ///
    /// The void outcome is not reported. A failed void is logged and leaves
    /// the one-unit authorization open until it expires.
    ///
    /// # Errors
    ///
    /// Returns an error only if the authorize call fails to produce a reply.
    pub fn store(
        &self,
        source: &PaymentSource,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let mut options = options.clone();
        if options.billing_id.is_none() && options.store.is_none() {
            options.alias_operation = Some(self.adapter.profile().store_alias_operation.to_string());
        }

        let response = self.authorize(Amount::from_minor(1), source, &options)?;
        if !response.is_success() {
            return Ok(response);
        }

        match self.void(response.authorization.as_str()) {
            Ok(void) if void.is_success() => {
                debug!(authorization = %response.authorization, "released store authorization")
            }
            Ok(void) => warn!(
                authorization = %response.authorization,
                message = %void.message,
                "void after store was declined; authorization left open"
            ),
            Err(err) => warn!(
                authorization = %response.authorization,
                error = %err,
                "void after store failed; authorization left open"
            ),
        }

        Ok(response)
    }

    /// Send one request and build its response
    ///
    /// Writes the credential fields, picks the endpoint from the presence of
    /// a payment id, signs, posts and parses. The response's authorization
    /// token is `"<PAYID>;<action>"`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] / [`GatewayError::HttpStatus`]
    /// when the request could not be delivered and [`GatewayError::Parse`]
    /// when the reply is unreadable.
    #[instrument(skip(self, outgoing), fields(action = %action, environment = %self.environment))]
    pub fn commit(
        &self,
        action: Operation,
        mut outgoing: RequestFields,
    ) -> Result<Response, GatewayError> {
        for (name, value) in self.adapter.credential_fields() {
            outgoing.set(name, value);
        }

        let class = OperationClass::for_fields(&outgoing);
        let url = self.adapter.endpoint(self.environment, class);
        debug!(?class, url = %url, "sending request");

        let body = codec::post_data(action.as_str(), &mut outgoing, &self.signer);
        let reply = self.transport.post(&url, body)?;
        let params = parser::parse(&reply)?;

        let success = parser::successful(&params);
        let message = parser::message_from(&params);
        if success {
            debug!(pay_id = ?params.get(PAY_ID), "request accepted");
        } else {
            info!(
                ncerror = ?params.get("NCERROR"),
                message = %message,
                "request rejected by provider"
            );
        }

        Ok(Response {
            success,
            message,
            authorization: Authorization::new(params.get(PAY_ID).map(String::as_str), action.as_str()),
            test: self.is_test(),
            avs_result: parser::avs_result(&params),
            cvv_result: parser::cvv_result(&params),
            params,
        })
    }

    fn new_order_fields(
        &self,
        amount: Amount,
        source: &PaymentSource,
        options: &TransactionOptions,
    ) -> RequestFields {
        let mut fields = RequestFields::new();
        request::add_invoice(&mut fields, options);
        request::add_payment_source(&mut fields, source, options);
        request::add_address(&mut fields, options);
        request::add_customer_data(&mut fields, options);
        request::add_money(&mut fields, amount, self.currency_for(options));
        fields
    }

    fn currency_for<'a>(&'a self, options: &'a TransactionOptions) -> &'a str {
        options
            .currency
            .as_deref()
            .or(self.currency.as_deref())
            .unwrap_or(self.adapter.profile().default_currency)
    }
}

impl<A: fmt::Debug, T> fmt::Debug for Gateway<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("adapter", &self.adapter)
            .field("environment", &self.environment)
            .field("currency", &self.currency)
            .field("signer", &self.signer)
            .finish()
    }
}
