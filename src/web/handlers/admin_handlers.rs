// src/web/handlers/admin_handlers.rs
use rocket::http::{CookieJar, Status};
use serde_json::json;
use tracing::{debug, info};

use crate::core::{Credentials, Endpoint, InboundBody, Proxy};
use crate::types::envelope::is_truthy_marker;
use crate::types::{map_user_rows, Envelope, ProxyReply, UserKind};
use crate::web::cookies::{self, ADMIN_ID, ADMIN_JWT};
use crate::web::guards::QueryParams;
use crate::web::handlers::{fetch, forward};

/// Login and OTP verification share the same cookie handling
pub async fn admin_session_start_handler(
    proxy: &Proxy,
    endpoint: &Endpoint,
    credentials: &Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    let reply = forward(proxy, endpoint, credentials, query, body).await;

    if let Some(admin_id) = signed_in_admin(&reply) {
        info!("Admin {} signed in", admin_id);
        jar.add(cookies::session_cookie(ADMIN_JWT, "1"));
        jar.add(cookies::session_cookie(ADMIN_ID, admin_id));
    }

    reply
}

/// Admin id of a completed sign-in, `None` while an OTP is still pending
fn signed_in_admin(reply: &ProxyReply) -> Option<String> {
    if !reply.is_ok() || !reply.success() {
        return None;
    }
    if reply.field("requires_otp").is_some_and(is_truthy_marker) {
        return None;
    }
    reply
        .field("admin_id")
        .or_else(|| reply.field("data").and_then(|data| data.get("admin_id")))
        .and_then(cookies::id_text)
}

pub async fn admin_logout_handler(jar: &CookieJar<'_>) -> ProxyReply {
    cookies::clear(jar, ADMIN_JWT);
    cookies::clear(jar, ADMIN_ID);
    ProxyReply::from_envelope(Status::Ok, Envelope::success("Logged out"))
}

pub async fn admin_session_handler(jar: &CookieJar<'_>) -> ProxyReply {
    let signed_in = cookies::value_of(jar, ADMIN_JWT).as_deref() == Some("1");
    match cookies::value_of(jar, ADMIN_ID) {
        Some(admin_id) if signed_in => {
            ProxyReply::from_envelope(Status::Ok, Envelope::ok(json!({ "admin_id": admin_id })))
        }
        _ => ProxyReply::unauthorized("Not authenticated"),
    }
}

pub async fn admin_users_handler(
    proxy: &Proxy,
    endpoint: &Endpoint,
    kind: UserKind,
    credentials: &Credentials,
    query: QueryParams,
) -> ProxyReply {
    let reply = fetch(proxy, endpoint, credentials, query).await;
    if !reply.is_ok() || !reply.success() {
        return reply;
    }

    let rows = map_user_rows(kind, &reply.body);
    debug!("Mapped {} {} rows", rows.len(), kind.role());
    ProxyReply::from_envelope(Status::Ok, Envelope::ok(rows))
}
