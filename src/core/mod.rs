// src/core/mod.rs
//! Backend access shared by every route

pub mod backend_client;
pub mod payload;
pub mod proxy;

pub use backend_client::{BackendClient, Credentials};
pub use payload::InboundBody;
pub use proxy::{Encoding, Endpoint, Inbound, Proxy};
