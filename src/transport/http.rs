//! Blocking HTTP transport
//!
//! Posts `application/x-www-form-urlencoded` bodies with reqwest's blocking
//! client. Requests are one-shot: nothing is retried here.

use super::{HttpConfig, Transport};
use crate::types::GatewayError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTPS transport using a pooled blocking reqwest client
///
/// # Examples
///
/// ```no_run
/// use ogone_directlink::transport::{HttpConfig, HttpTransport, Transport};
///
/// let transport = HttpTransport::with_config(&HttpConfig::default()).unwrap();
/// let body = transport
///     .post("https://secure.ogone.com/ncol/test/orderdirect.asp", "PSPID=x".to_string())
///     .unwrap();
/// println!("{}", body);
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the given timeouts
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] if the timeouts are out of
    /// range, or [`GatewayError::Transport`] if the client cannot be built.
    pub fn with_config(config: &HttpConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    fn post(&self, url: &str, body: String) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "text/xml")
            .body(body)
            .send()?;

        let status = response.status();
        debug!(status = status.as_u16(), "received reply");

        if !status.is_success() {
            return Err(GatewayError::http_status(status.as_u16(), url));
        }

        Ok(response.text()?)
    }
}
