//! Visitor record model.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::{RecordId, StatusTier, VisitorStatus};

/// One logged visit, as returned by the visitor-listing endpoint.
///
/// Every field except `id` may be absent. Text fields are read leniently:
/// strings are kept, numbers and booleans are stringified, anything else
/// (null, objects, arrays) is treated as missing. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVisitorRecord", rename_all = "camelCase")]
pub struct VisitorRecord {
    pub id: RecordId,
    pub name: Option<String>,
    pub purpose: Option<String>,
    pub contact_person: Option<String>,
    pub location: Option<String>,
    pub visitor_type: Option<String>,
    pub time_in: Option<String>,
    /// Empty or absent while the visit is still in progress.
    pub time_out: Option<String>,
    pub status: Option<VisitorStatus>,
    /// URL of the visitor's photo. Never an empty string.
    pub photo: Option<String>,
}

impl VisitorRecord {
    /// Create a record with only an id set.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            purpose: None,
            contact_person: None,
            location: None,
            visitor_type: None,
            time_in: None,
            time_out: None,
            status: None,
            photo: None,
        }
    }

    /// Display tier of this record's status.
    pub fn tier(&self) -> StatusTier {
        StatusTier::for_optional(self.status.as_ref())
    }

    /// Whether the visit has no recorded time out yet.
    pub fn is_in_progress(&self) -> bool {
        self.time_out.as_deref().is_none_or(|t| t.trim().is_empty())
    }

    /// Calendar date of the check-in, if `time_in` carries one.
    ///
    /// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM[:SS]` and bare
    /// `YYYY-MM-DD`. Clock-only values like `09:00` have no date.
    pub fn time_in_date(&self) -> Option<NaiveDate> {
        let raw = self.time_in.as_deref()?.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }

        let head = raw.get(..10)?;
        let rest = &raw[10..];
        if !(rest.is_empty() || rest.starts_with(['T', ' '])) {
            return None;
        }
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }
}

/// Wire shape accepted from the store before leniency rules are applied.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVisitorRecord {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    document_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    purpose: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    contact_person: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    visitor_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    time_in: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    time_out: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    photo: Option<String>,
}

impl TryFrom<RawVisitorRecord> for VisitorRecord {
    type Error = String;

    fn try_from(raw: RawVisitorRecord) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.document_id)
            .ok_or_else(|| "visitor record has no id".to_string())?;

        Ok(Self {
            id,
            name: raw.name,
            purpose: raw.purpose,
            contact_person: raw.contact_person,
            location: raw.location,
            visitor_type: raw.visitor_type,
            time_in: raw.time_in,
            time_out: raw.time_out,
            status: raw.status.as_deref().map(VisitorStatus::parse),
            photo: raw.photo.filter(|p| !p.trim().is_empty()),
        })
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
