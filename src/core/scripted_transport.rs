//! In-memory transport for unit tests
//!
//! Replays queued replies in order and records every request it is handed.

use crate::transport::Transport;
use crate::types::GatewayError;
use std::collections::VecDeque;
use std::sync::Mutex;
use url::form_urlencoded;

#[derive(Debug, Clone)]
pub struct SentRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl SentRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn count(&self, name: &str) -> usize {
        self.fields.iter().filter(|(k, _)| k == name).count()
    }
}

#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        ScriptedTransport::default()
    }

    pub fn reply(self, body: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    pub fn fail(self, error: GatewayError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn post(&self, url: &str, body: String) -> Result<String, GatewayError> {
        let fields = form_urlencoded::parse(body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        self.sent.lock().unwrap().push(SentRequest {
            url: url.to_string(),
            fields,
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::transport("no scripted reply left")))
    }
}

/// Accepted reply carrying `pay_id`
pub fn accepted(pay_id: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><ncresponse orderID="order-1" PAYID="{}" NCSTATUS="0" NCERROR="0" NCERRORPLUS="!" STATUS="5" CVCCheck="OK" AAVCheck="KO" amount="1" currency="GBP"></ncresponse>"#,
        pay_id
    )
}

/// Rejected reply with the given `NCERRORPLUS` text
pub fn rejected(pay_id: &str, error_plus: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><ncresponse orderID="order-1" PAYID="{}" NCSTATUS="3" NCERROR="30001001" NCERRORPLUS="{}" STATUS="2"></ncresponse>"#,
        pay_id, error_plus
    )
}
