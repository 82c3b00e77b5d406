// src/types/envelope.rs
//! The `{success, message, data}` shape every route answers with

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Characters of a non-JSON upstream body kept for diagnostics
pub const RAW_SNIPPET_CHARS: usize = 200;

pub const INVALID_UPSTREAM_MESSAGE: &str = "Invalid response from server";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            raw: None,
        }
    }
}

impl Envelope<Value> {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            raw: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            raw: None,
        }
    }
}

/// A JSON body with the HTTP status it is sent with
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: Status,
    pub body: Value,
}

impl ProxyReply {
    pub fn new(status: Status, body: Value) -> Self {
        Self { status, body }
    }

    pub fn from_envelope<T: Serialize>(status: Status, envelope: Envelope<T>) -> Self {
        let body = serde_json::to_value(&envelope).unwrap_or_else(|_| {
            serde_json::json!({ "success": false, "message": INTERNAL_ERROR_MESSAGE })
        });
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_envelope(Status::BadRequest, Envelope::failure(message))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_envelope(Status::Unauthorized, Envelope::failure(message))
    }

    pub fn internal_error() -> Self {
        Self::from_envelope(
            Status::InternalServerError,
            Envelope::failure(INTERNAL_ERROR_MESSAGE),
        )
    }

    /// 502 carrying the start of the unparseable body
    pub fn invalid_upstream(raw_body: &str) -> Self {
        let envelope = Envelope::<Value> {
            success: false,
            message: Some(INVALID_UPSTREAM_MESSAGE.to_string()),
            data: None,
            raw: Some(truncate_chars(raw_body, RAW_SNIPPET_CHARS)),
        };
        Self::from_envelope(Status::BadGateway, envelope)
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status.code)
    }

    pub fn success(&self) -> bool {
        self.body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}

impl<'r> Responder<'r, 'static> for ProxyReply {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}

/// Whether a backend value counts as a success marker.
///
/// The PHP backend reports outcome through `success` (bool) on newer
/// endpoints and through `status` (`1`, `"success"`) on older ones.
pub fn is_truthy_marker(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1) || n.as_u64() == Some(1),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "success" | "ok"
        ),
        _ => false,
    }
}

/// Success as signalled by the payload itself, `success` taking precedence over `status`
pub fn payload_success(payload: &Map<String, Value>) -> Option<bool> {
    if let Some(success) = payload.get("success") {
        return Some(is_truthy_marker(success));
    }
    payload.get("status").and_then(|status| match status {
        // HTTP-like numeric status codes are not markers
        Value::Number(n) if n.as_u64().is_some_and(|code| code >= 100) => None,
        other => Some(is_truthy_marker(other)),
    })
}

/// Message carried by a failed backend payload
pub fn payload_message(payload: &Map<String, Value>) -> Option<String> {
    ["message", "error", "msg"]
        .iter()
        .filter_map(|key| payload.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        })
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
