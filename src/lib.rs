// src/lib.rs
//! Backend-for-frontend of the career portal: forwards browser requests to
//! the PHP backend and reshapes its replies into a uniform JSON envelope.

pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod types;
pub mod web;

pub use config::ApiConfig;
pub use layout::{layout_for, Chrome, LayoutDecision, Section};
pub use types::{Envelope, Job, ProxyReply};
pub use web::{build_rocket, start_web_server};
