// src/web/handlers/employer_handlers.rs
use rocket::http::CookieJar;
use serde_json::Value;
use tracing::info;

use crate::core::{Credentials, Endpoint, Inbound, InboundBody, Proxy};
use crate::types::ProxyReply;
use crate::web::cookies::{self, EMPLOYER_ID};
use crate::web::guards::QueryParams;
use crate::web::handlers::forward;

pub async fn employer_login_handler(
    proxy: &Proxy,
    endpoint: &Endpoint,
    credentials: &Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    let reply = forward(proxy, endpoint, credentials, query, body).await;

    if reply.is_ok() && reply.success() {
        if let Some(employer_id) = employer_id_of(&reply.body) {
            info!("Employer {} signed in", employer_id);
            jar.add(cookies::session_cookie(EMPLOYER_ID, employer_id));
        }
    }

    reply
}

fn employer_id_of(body: &Value) -> Option<String> {
    let data = body.get("data");
    body.get("employer_id")
        .and_then(cookies::id_text)
        .or_else(|| data.and_then(|d| d.get("employer_id")).and_then(cookies::id_text))
        .or_else(|| data.and_then(|d| d.get("id")).and_then(cookies::id_text))
}

/// The cookie is dropped whatever the backend answers
pub async fn employer_logout_handler(
    proxy: &Proxy,
    endpoint: &Endpoint,
    credentials: &Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    let reply = forward(proxy, endpoint, credentials, query, body).await;
    cookies::clear(jar, EMPLOYER_ID);
    reply
}

/// Reads scoped to one employer, falling back to the session cookie for the id
pub async fn employer_scoped_handler(
    proxy: &Proxy,
    endpoint: &Endpoint,
    credentials: &Credentials,
    query: QueryParams,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    let mut inbound = Inbound::new(credentials).with_query(query.into_inner());
    if inbound.field("employer_id").is_none() {
        if let Some(employer_id) = cookies::value_of(jar, EMPLOYER_ID) {
            inbound.set_query_param("employer_id", employer_id);
        }
    }
    proxy.forward(endpoint, inbound).await
}
