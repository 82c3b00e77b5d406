// src/web/cookies.rs
//! Session-marker cookies mirrored from the backend's own session

use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::time::Duration;
use serde_json::Value;

pub const ADMIN_JWT: &str = "admin_jwt";
pub const ADMIN_ID: &str = "admin_id";
pub const EMPLOYER_ID: &str = "employer_id";

const SESSION_DAYS: i64 = 7;

pub fn session_cookie(name: &'static str, value: impl Into<String>) -> Cookie<'static> {
    Cookie::build((name, value.into()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(SESSION_DAYS))
        .build()
}

pub fn clear(jar: &CookieJar<'_>, name: &'static str) {
    jar.remove(Cookie::build(name).path("/").build());
}

/// Cookie value, ignoring blanks
pub fn value_of(jar: &CookieJar<'_>, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Backend ids arrive as numbers or strings
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
