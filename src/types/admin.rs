// src/types/admin.rs
//! Admin user tables: the backend returns DataTables rows, the UI wants objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_STATUS: &str = "Active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Employer,
    Jobseeker,
}

impl UserKind {
    pub fn role(&self) -> &'static str {
        match self {
            UserKind::Employer => "Employer",
            UserKind::Jobseeker => "Job Seeker",
        }
    }

    fn name_keys(&self) -> &'static [&'static str] {
        match self {
            UserKind::Employer => &["company_name", "name"],
            UserKind::Jobseeker => &["full_name", "name"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserRow {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl AdminUserRow {
    /// Map one row, either positional `[id, name, email, status?]` or keyed
    pub fn from_row(kind: UserKind, row: &Value) -> Option<Self> {
        let (name, email, status) = match row {
            Value::Array(cells) => (
                cell_text(cells.get(1)),
                cell_text(cells.get(2)),
                cell_text(cells.get(3)),
            ),
            Value::Object(fields) => (
                kind.name_keys()
                    .iter()
                    .map(|key| cell_text(fields.get(*key)))
                    .find(|name| !name.is_empty())
                    .unwrap_or_default(),
                cell_text(fields.get("email")),
                cell_text(fields.get("status")),
            ),
            _ => return None,
        };

        Some(Self {
            kind,
            name,
            email,
            role: kind.role().to_string(),
            status: if status.is_empty() {
                DEFAULT_STATUS.to_string()
            } else {
                status
            },
        })
    }
}

/// Rows of a backend user listing: a bare array or a DataTables `{data: [...]}` payload
pub fn map_user_rows(kind: UserKind, payload: &Value) -> Vec<AdminUserRow> {
    let rows: &[Value] = match payload {
        Value::Array(rows) => rows.as_slice(),
        Value::Object(fields) => match fields.get("data").or_else(|| fields.get("aaData")) {
            Some(Value::Array(rows)) => rows.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    rows.iter()
        .filter_map(|row| AdminUserRow::from_row(kind, row))
        .collect()
}

fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
