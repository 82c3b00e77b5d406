// src/web/guards.rs
//! Request guards: session credentials, query parameters and the raw body

use rocket::data::{self, Data, FromData, ToByteUnit};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::core::backend_client::REQUEST_ID_HEADER;
use crate::core::payload::{multipart_fields, parse_urlencoded, InboundBody};
use crate::core::Credentials;

const JSON_LIMIT_MB: u64 = 2;

/// Per-request id, generated once and cached on the request
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn of(req: &Request<'_>) -> String {
        req.local_cache(|| {
            let id = req
                .headers()
                .get_one(REQUEST_ID_HEADER)
                .filter(|id| !id.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            RequestId(id)
        })
        .0
        .clone()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Credentials {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let header = |name: &str| {
            req.headers()
                .get_one(name)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };

        // Raw header keeps the client's encoding, the jar only covers
        // cookies added without one (local clients)
        let raw = req
            .headers()
            .get("Cookie")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        let cookie = if raw.is_empty() {
            req.cookies()
                .iter()
                .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
                .collect::<Vec<_>>()
                .join("; ")
        } else {
            raw
        };

        Outcome::Success(Credentials {
            cookie: Some(cookie).filter(|c| !c.is_empty()),
            authorization: header("Authorization"),
            request_id: Some(RequestId::of(req)),
        })
    }
}

/// Decoded query string in its original order
#[derive(Debug, Clone, Default)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for QueryParams {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let pairs = req
            .uri()
            .query()
            .map(|query| {
                query
                    .segments()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Outcome::Success(QueryParams(pairs))
    }
}

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("request body exceeds the configured limit")]
    TooLarge,
    #[error("failed to read request body: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("form body is not valid UTF-8")]
    InvalidUtf8,
    #[error("malformed multipart body: {0}")]
    InvalidMultipart(multer::Error),
}

#[rocket::async_trait]
impl<'r> FromData<'r> for InboundBody {
    type Error = BodyError;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let content_type = req.content_type().cloned();

        if let Some(ct) = content_type.as_ref().filter(|ct| ct.is_form_data()) {
            let limit = match req.guard::<&State<ApiConfig>>().await {
                Outcome::Success(config) => config.max_body_mb,
                _ => JSON_LIMIT_MB,
            };
            let bytes = match read_capped(data, limit).await {
                Ok(bytes) => bytes,
                Err(e) => return reject(e),
            };
            let content_type = ct.to_string();
            return match multipart_fields(&content_type, &bytes).await {
                Ok(fields) => data::Outcome::Success(InboundBody::Multipart {
                    content_type,
                    bytes,
                    fields,
                }),
                Err(e) => reject(BodyError::InvalidMultipart(e)),
            };
        }

        let bytes = match read_capped(data, JSON_LIMIT_MB).await {
            Ok(bytes) => bytes,
            Err(e) => return reject(e),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return data::Outcome::Success(InboundBody::Empty);
        }

        if content_type.as_ref().is_some_and(|ct| ct.is_form()) {
            return match String::from_utf8(bytes) {
                Ok(text) => data::Outcome::Success(InboundBody::Form(parse_urlencoded(&text))),
                Err(_) => reject(BodyError::InvalidUtf8),
            };
        }

        // Anything else is read as JSON, matching how the browser client posts
        match serde_json::from_slice(&bytes) {
            Ok(value) => data::Outcome::Success(InboundBody::Json(value)),
            Err(e) => reject(BodyError::InvalidJson(e)),
        }
    }
}

async fn read_capped(data: Data<'_>, limit_mb: u64) -> Result<Vec<u8>, BodyError> {
    let capped = data
        .open(limit_mb.mebibytes())
        .into_bytes()
        .await
        .map_err(BodyError::Io)?;
    if !capped.is_complete() {
        return Err(BodyError::TooLarge);
    }
    Ok(capped.into_inner())
}

fn reject<'r>(error: BodyError) -> data::Outcome<'r, InboundBody> {
    warn!("Rejecting request body: {}", error);
    let status = match error {
        BodyError::TooLarge => Status::PayloadTooLarge,
        _ => Status::BadRequest,
    };
    data::Outcome::Error((status, error))
}
