//! DirectLink reply parsing
//!
//! Replies are a single `ncresponse` element whose attributes carry the
//! outcome. 3-D Secure replies additionally nest an `HTML_ANSWER` element
//! holding the (base64) challenge page.
//!
//! ```xml
//! <?xml version="1.0"?>
//! <ncresponse orderID="1" PAYID="3014726" NCSTATUS="0" NCERROR="0"
//!   NCERRORPLUS="!" ACCEPTANCE="test123" STATUS="5" AAVCheck="NO"
//!   CVCCheck="NO" amount="1" currency="GBP"/>
//! ```

use crate::types::{AvsCode, CvvCode, GatewayError};
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

pub const SUCCESS_MESSAGE: &str = "The transaction was successful";

const HTML_ANSWER: &str = "HTML_ANSWER";

/// Parse a reply body into its fields
///
/// # Errors
///
/// Returns [`GatewayError::Parse`] if the body is not well-formed XML or has
/// no root element.
pub fn parse(body: &str) -> Result<IndexMap<String, String>, GatewayError> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut params = IndexMap::new();
    let mut saw_root = false;
    let mut html_answer: Option<String> = None;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                if !saw_root {
                    saw_root = true;
                    collect_attributes(element, &mut params)?;
                } else if element.local_name().as_ref() == HTML_ANSWER.as_bytes()
                    && matches!(event, Event::Start(_))
                {
                    html_answer = Some(String::new());
                }
            }
            Event::Text(text) => {
                if let Some(answer) = html_answer.as_mut() {
                    answer.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(answer) = html_answer.as_mut() {
                    answer.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(element) => {
                if element.local_name().as_ref() == HTML_ANSWER.as_bytes() {
                    if let Some(answer) = html_answer.take() {
                        params.insert(HTML_ANSWER.to_string(), answer);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(GatewayError::parse("reply has no root element"));
    }
    Ok(params)
}

fn collect_attributes(
    element: &BytesStart<'_>,
    params: &mut IndexMap<String, String>,
) -> Result<(), GatewayError> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| GatewayError::parse(e.to_string()))?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        params.insert(name, value);
    }
    Ok(())
}

/// Whether the provider accepted the request (`NCERROR` is `0`)
pub fn successful(params: &IndexMap<String, String>) -> bool {
    params.get("NCERROR").is_some_and(|code| code == "0")
}

pub fn message_from(params: &IndexMap<String, String>) -> String {
    if successful(params) {
        SUCCESS_MESSAGE.to_string()
    } else {
        format_error_message(params.get("NCERRORPLUS").map(String::as_str).unwrap_or_default())
    }
}

/// Normalize an `NCERRORPLUS` text
///
/// `a|b` lists become `a, b`; for `a/b` only `a` is kept. The result has an
/// upper-case first letter and is lower-case otherwise.
pub fn format_error_message(raw: &str) -> String {
    let raw = raw.trim();
    let message = if raw.contains('|') {
        raw.split('|').collect::<Vec<_>>().join(", ")
    } else if raw.contains('/') {
        raw.split('/').next().unwrap_or_default().to_string()
    } else {
        raw.to_string()
    };
    capitalize(&message)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn avs_result(params: &IndexMap<String, String>) -> Option<AvsCode> {
    params
        .get("AAVCheck")
        .and_then(|value| AvsCode::from_provider(value))
}

pub fn cvv_result(params: &IndexMap<String, String>) -> Option<CvvCode> {
    params
        .get("CVCCheck")
        .and_then(|value| CvvCode::from_provider(value))
}
