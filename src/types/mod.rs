pub mod admin;
pub mod envelope;
pub mod job;

pub use admin::{map_user_rows, AdminUserRow, UserKind};
pub use envelope::{Envelope, ProxyReply};
pub use job::Job;
