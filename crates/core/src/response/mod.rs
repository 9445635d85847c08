//! Response interpretation.
//!
//! Status classification and body decoding as pure functions over the raw
//! status code and bytes a transport returns.

mod error;

use serde_json::Value;

use crate::catalog::{Operation, ResponseKind};

pub use error::ResponseError;

/// Status and body exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Turn a raw response into the operation's JSON result.
///
/// Non-2xx statuses become [`ResponseError::Http`] carrying the body text.
/// On success the body is decoded verbatim. For [`ResponseKind::NoContent`]
/// operations an empty body yields `Value::Null` instead of a decode error.
pub fn decode_response(operation: &Operation, response: &RawResponse) -> Result<Value, ResponseError> {
    if !response.is_success() {
        return Err(ResponseError::Http {
            status: response.status,
            body: response.text(),
        });
    }

    if operation.response == ResponseKind::NoContent && is_blank(&response.body) {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(&response.body)?)
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
