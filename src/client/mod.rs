// src/client/mod.rs
//! Typed access to this service's own routes, for Rust callers

pub mod jobs_api;

pub use jobs_api::{ClientError, JobFilters, JobsApi};
