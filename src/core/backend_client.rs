// src/core/backend_client.rs
//! HTTP client for the PHP backend - credentials travel with every call

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::error::ProxyError;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Session material copied from the browser request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Attach the credentials to an outgoing request
    pub fn apply(&self, mut builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(authorization) = &self.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(request_id) = &self.request_id {
            builder = builder.header(REQUEST_ID_HEADER, request_id);
        }
        builder
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutboundBody {
    Empty,
    Json(Value),
    Form(Vec<(String, String)>),
    Raw { content_type: String, bytes: Vec<u8> },
}

#[derive(Debug)]
pub struct UpstreamRequest<'a> {
    pub method: Method,
    pub path: &'a str,
    pub query: Vec<(String, String)>,
    pub body: OutboundBody,
    pub credentials: &'a Credentials,
}

/// Raw upstream answer; interpretation is left to the proxy layer
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<Url, ProxyError> {
        let raw = crate::config::join_url(&self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ProxyError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// Send one request, no retries
    pub async fn send(&self, request: UpstreamRequest<'_>) -> Result<UpstreamResponse, ProxyError> {
        let url = self.url_for(request.path, &request.query)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method, url);
        builder = request.credentials.apply(builder);

        builder = match request.body {
            OutboundBody::Empty => builder,
            OutboundBody::Json(value) => builder.json(&value),
            OutboundBody::Form(pairs) => builder.form(&pairs),
            OutboundBody::Raw {
                content_type,
                bytes,
            } => builder.header(CONTENT_TYPE, content_type).body(bytes),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        trace!("Upstream status: {}", status);

        let body = response.text().await?;
        Ok(UpstreamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        BackendClient::new(&ApiConfig::new("http://backend.test/api/")).unwrap()
    }

    #[test]
    fn builds_url_with_encoded_query() {
        let url = client()
            .url_for(
                "/jobs/get_jobs.php",
                &[
                    ("search".to_string(), "php dev".to_string()),
                    ("location".to_string(), "Port Harcourt & Lagos".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(url.path(), "/api/jobs/get_jobs.php");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("search".to_string(), "php dev".to_string()));
        assert_eq!(pairs[1].1, "Port Harcourt & Lagos");
    }

    #[test]
    fn rejects_unparseable_base() {
        let client = BackendClient::new(&ApiConfig::new("not a url")).unwrap();
        assert!(matches!(
            client.url_for("/x.php", &[]),
            Err(ProxyError::InvalidUrl(_))
        ));
    }

    #[test]
    fn credentials_builder() {
        let credentials = Credentials::anonymous()
            .with_cookie("PHPSESSID=abc")
            .with_authorization("Bearer t");
        assert_eq!(credentials.cookie.as_deref(), Some("PHPSESSID=abc"));
        assert_eq!(credentials.authorization.as_deref(), Some("Bearer t"));
        assert!(credentials.request_id.is_none());
    }
}
