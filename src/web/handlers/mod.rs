// src/web/handlers/mod.rs
pub mod admin_handlers;
pub mod employer_handlers;
pub mod jobs_handlers;
pub mod system_handlers;

pub use admin_handlers::*;
pub use employer_handlers::*;
pub use jobs_handlers::*;
pub use system_handlers::*;

use crate::core::{Credentials, Endpoint, Inbound, InboundBody, Proxy};
use crate::types::ProxyReply;
use crate::web::guards::QueryParams;

/// Forward a request with a body
pub async fn forward(
    proxy: &Proxy,
    endpoint: &Endpoint,
    credentials: &Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    let inbound = Inbound::new(credentials)
        .with_query(query.into_inner())
        .with_body(body);
    proxy.forward(endpoint, inbound).await
}

/// Forward a query-only request
pub async fn fetch(
    proxy: &Proxy,
    endpoint: &Endpoint,
    credentials: &Credentials,
    query: QueryParams,
) -> ProxyReply {
    forward(proxy, endpoint, credentials, query, InboundBody::Empty).await
}
