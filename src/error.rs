// src/error.rs
use thiserror::Error;

use crate::types::ProxyReply;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

// The cause is logged where it happens and never sent to the browser
impl From<ProxyError> for ProxyReply {
    fn from(_: ProxyError) -> Self {
        ProxyReply::internal_error()
    }
}
