// src/types/job.rs
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Read-only projection of a job posting as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default, deserialize_with = "optional_number")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub posted_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Job {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        parse_backend_date(&self.posted_date)
    }

    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expiry_date.as_deref().and_then(parse_backend_date)
    }

    /// A job without an expiry date never expires
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on().is_some_and(|expiry| expiry < today)
    }
}

/// MySQL dates come back as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`
fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
