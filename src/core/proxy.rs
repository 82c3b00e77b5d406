// src/core/proxy.rs
//! Generic forward-and-normalize used by every backend-facing route

use reqwest::Method;
use rocket::http::Status;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::core::backend_client::{
    BackendClient, Credentials, OutboundBody, UpstreamRequest, UpstreamResponse,
};
use crate::core::payload::InboundBody;
use crate::types::envelope::{self, ProxyReply};

/// How the backend expects the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `application/x-www-form-urlencoded`; multipart passes through
    Form,
    /// `application/json`; multipart passes through
    Json,
    /// No body, parameters travel in the query string
    Query,
}

#[derive(Debug, Clone, Copy)]
pub struct Required {
    pub field: &'static str,
    pub message: &'static str,
}

pub const fn required(field: &'static str, message: &'static str) -> Required {
    Required { field, message }
}

/// One backend endpoint as seen by the proxy
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    pub upstream: &'static str,
    pub encoding: Encoding,
    pub required: &'static [Required],
}

/// Everything taken from the browser request
#[derive(Debug)]
pub struct Inbound<'a> {
    pub query: Vec<(String, String)>,
    pub body: InboundBody,
    pub credentials: &'a Credentials,
}

impl<'a> Inbound<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            query: Vec::new(),
            body: InboundBody::Empty,
            credentials,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: InboundBody) -> Self {
        self.body = body;
        self
    }

    /// Query parameter first, then body field
    pub fn field(&self, name: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(key, value)| key == name && !value.trim().is_empty())
            .map(|(_, value)| value.clone())
            .or_else(|| self.body.field(name))
    }

    pub fn set_query_param(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.query.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.query.push((name.to_string(), value)),
        }
    }

    pub fn missing(&self, required: &[Required]) -> Option<Required> {
        required
            .iter()
            .find(|requirement| self.field(requirement.field).is_none())
            .copied()
    }
}

pub struct Proxy {
    client: BackendClient,
}

impl Proxy {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub async fn forward(&self, endpoint: &Endpoint, inbound: Inbound<'_>) -> ProxyReply {
        if let Some(requirement) = inbound.missing(endpoint.required) {
            warn!(
                "Rejecting {} call: missing {}",
                endpoint.upstream, requirement.field
            );
            return ProxyReply::bad_request(requirement.message);
        }

        let request_id = inbound
            .credentials
            .request_id
            .clone()
            .unwrap_or_default();
        info!(
            "[{}] Forwarding to {} {}",
            request_id, endpoint.method, endpoint.upstream
        );

        let body = outbound_body(endpoint.encoding, inbound.body);
        let request = UpstreamRequest {
            method: endpoint.method.clone(),
            path: endpoint.upstream,
            query: inbound.query,
            body,
            credentials: inbound.credentials,
        };

        match self.client.send(request).await {
            Ok(response) => {
                let reply = normalize(&response);
                if !reply.success() {
                    warn!(
                        "[{}] {} answered {} without success",
                        request_id, endpoint.upstream, response.status
                    );
                }
                reply
            }
            Err(e) => {
                error!("[{}] {} failed: {}", request_id, endpoint.upstream, e);
                e.into()
            }
        }
    }
}

fn outbound_body(encoding: Encoding, body: InboundBody) -> OutboundBody {
    match (encoding, body) {
        (Encoding::Query, _) => OutboundBody::Empty,
        (
            _,
            InboundBody::Multipart {
                content_type,
                bytes,
                ..
            },
        ) => OutboundBody::Raw {
            content_type,
            bytes,
        },
        (_, InboundBody::Empty) => OutboundBody::Empty,
        (Encoding::Form, body) => OutboundBody::Form(body.to_form_pairs()),
        (Encoding::Json, body) => OutboundBody::Json(body.to_json()),
    }
}

/// Turn whatever the backend sent into an envelope-shaped reply
pub fn normalize(response: &UpstreamResponse) -> ProxyReply {
    let status = Status::new(response.status);
    let http_ok = (200..300).contains(&response.status);
    let text = response.body.trim_start_matches('\u{feff}').trim();

    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) if http_ok => return ProxyReply::invalid_upstream(&response.body),
        Err(_) => {
            let mut reply = failure_body(response.status, Map::new());
            reply.insert(
                "raw".to_string(),
                Value::String(envelope::truncate_chars(
                    &response.body,
                    envelope::RAW_SNIPPET_CHARS,
                )),
            );
            return ProxyReply::new(status, Value::Object(reply));
        }
    };

    let body = match parsed {
        Value::Object(payload) if http_ok => {
            let mut payload = payload;
            let success = envelope::payload_success(&payload).unwrap_or(true);
            if !matches!(payload.get("success"), Some(Value::Bool(_))) {
                payload.insert("success".to_string(), Value::Bool(success));
            }
            Value::Object(payload)
        }
        Value::Object(payload) => Value::Object(failure_body(response.status, payload)),
        other if http_ok => serde_json::json!({ "success": true, "data": other }),
        other => {
            let mut payload = failure_body(response.status, Map::new());
            payload.insert("data".to_string(), other);
            Value::Object(payload)
        }
    };

    ProxyReply::new(status, body)
}

fn failure_body(status: u16, mut payload: Map<String, Value>) -> Map<String, Value> {
    let message = envelope::payload_message(&payload)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    payload.insert("success".to_string(), Value::Bool(false));
    payload.insert("message".to_string(), Value::String(message));
    payload
}
