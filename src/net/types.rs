//! Wire types for the reports and transcription endpoints.
//!
//! DESIGN
//! ======
//! Only the fields the page reads are modeled; server-side extras such as
//! `owner_email` are tolerated and ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key dropped from the report payload when its value is empty.
pub const DESCRIPTION_FIELD: &str = "description";

/// A medical report as listed by `GET /reports`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Report {
    pub title: String,
    /// ISO-8601 timestamp as emitted by the backend.
    pub upload_date: String,
    pub report_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Flat key/value body for `POST /reports`.
///
/// Built from the form's fields in document order; a later field with the
/// same name overwrites an earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportPayload(BTreeMap<String, String>);

impl ReportPayload {
    /// Build a payload from raw form entries, omitting an empty description.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if fields.get(DESCRIPTION_FIELD).is_some_and(String::is_empty) {
            fields.remove(DESCRIPTION_FIELD);
        }
        Self(fields)
    }
}

/// Error body returned by the backend on a rejected request.
///
/// `detail` is a plain string for handled errors and an array of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail text, if the server provided a usable one.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let messages = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .collect::<Vec<_>>();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Response body of `POST /transcribe`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TranscribeResponse {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub error: Option<String>,
}
