// src/web/handlers/jobs_handlers.rs
use crate::core::{Credentials, Endpoint, Inbound, Proxy};
use crate::types::ProxyReply;
use crate::web::guards::QueryParams;

/// Job details: the path id becomes the backend's `id` query parameter
pub async fn job_details_handler(
    proxy: &Proxy,
    endpoint: &Endpoint,
    id: &str,
    credentials: &Credentials,
    query: QueryParams,
) -> ProxyReply {
    if id.trim().is_empty() {
        return ProxyReply::bad_request("Job ID is required");
    }
    let mut inbound = Inbound::new(credentials).with_query(query.into_inner());
    inbound.set_query_param("id", id.trim());
    proxy.forward(endpoint, inbound).await
}
