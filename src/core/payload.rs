// src/core/payload.rs
//! Inbound request bodies and their re-encoding for the backend

use multer::Multipart;
use rocket::http::RawStr;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum InboundBody {
    Empty,
    Json(Value),
    Form(Vec<(String, String)>),
    /// Forwarded untouched; `content_type` keeps the boundary and
    /// `fields` holds the parts read for validation
    Multipart {
        content_type: String,
        bytes: Vec<u8>,
        fields: Vec<(String, String)>,
    },
}

impl InboundBody {
    /// Value of a named field, `None` when absent, null or blank
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match self {
            InboundBody::Json(Value::Object(fields)) => fields.get(name).and_then(scalar_text),
            InboundBody::Form(pairs) | InboundBody::Multipart { fields: pairs, .. } => pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            _ => None,
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Pairs for an `application/x-www-form-urlencoded` body
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        match self {
            InboundBody::Json(Value::Object(fields)) => fields
                .iter()
                .map(|(key, value)| (key.clone(), form_value(value)))
                .collect(),
            InboundBody::Form(pairs) => pairs.clone(),
            _ => Vec::new(),
        }
    }

    /// JSON document for a JSON backend endpoint
    pub fn to_json(&self) -> Value {
        match self {
            InboundBody::Json(value) => value.clone(),
            InboundBody::Form(pairs) => Value::Object(
                pairs
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                    .collect::<Map<String, Value>>(),
            ),
            _ => Value::Object(Map::new()),
        }
    }
}

/// How a JSON value is written into a urlencoded form
pub fn form_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(form_value(other)),
    }
}

/// Named parts of a multipart body; file parts map to their file name
pub async fn multipart_fields(
    content_type: &str,
    bytes: &[u8],
) -> Result<Vec<(String, String)>, multer::Error> {
    let boundary = multer::parse_boundary(content_type)?;
    let mut multipart = Multipart::with_reader(bytes, boundary);
    let mut fields = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let file_name = field.file_name().map(str::to_string);
        let value = match file_name {
            Some(file_name) => file_name,
            None => field.text().await?,
        };
        fields.push((name, value));
    }
    Ok(fields)
}

/// Decode `a=1&b=two+words` into ordered pairs
pub fn parse_urlencoded(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                RawStr::new(key).url_decode_lossy().into_owned(),
                RawStr::new(value).url_decode_lossy().into_owned(),
            )
        })
        .collect()
}
