// src/web/handlers/system_handlers.rs
use rocket::http::Status;
use tracing::{debug, info};

use crate::core::Proxy;
use crate::layout::layout_for;
use crate::types::{Envelope, ProxyReply};

pub async fn health_handler(proxy: &Proxy) -> ProxyReply {
    info!("Health check (backend: {})", proxy.client().base_url());
    ProxyReply::from_envelope(Status::Ok, Envelope::success("OK"))
}

pub async fn layout_handler(path: Option<&str>) -> ProxyReply {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => {
            let decision = layout_for(path);
            debug!("Layout for {}: {:?}", path, decision.section);
            ProxyReply::from_envelope(Status::Ok, Envelope::ok(decision))
        }
        None => ProxyReply::bad_request("Path is required"),
    }
}
