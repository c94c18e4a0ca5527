//! Display models derived from visitor records.

use serde::Serialize;

use crate::record::VisitorRecord;
use crate::types::{RecordId, StatusTier};

/// Text shown in place of a missing photo.
pub const NO_PHOTO: &str = "No Photo";

/// Title of the detail overlay.
pub const DETAIL_TITLE: &str = "Visitor Details";

/// One row of the visitor table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub id: RecordId,
    pub name: String,
    pub time_in: String,
    pub time_out: String,
    pub purpose: String,
    pub contact_person: String,
    pub status: String,
    pub tier: StatusTier,
}

impl From<&VisitorRecord> for RecordRow {
    fn from(record: &VisitorRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: text(&record.name),
            time_in: text(&record.time_in),
            time_out: text(&record.time_out),
            purpose: text(&record.purpose),
            contact_person: text(&record.contact_person),
            status: record
                .status
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            tier: record.tier(),
        }
    }
}

/// The photo slot of the detail view. Always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum PhotoSlot {
    Image(String),
    Placeholder,
}

impl PhotoSlot {
    /// Text to show for the slot: the image URL or the placeholder.
    pub fn label(&self) -> &str {
        match self {
            PhotoSlot::Image(url) => url,
            PhotoSlot::Placeholder => NO_PHOTO,
        }
    }
}

/// Everything the detail overlay shows for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub title: &'static str,
    pub photo: PhotoSlot,
    /// Labelled fields in display order.
    pub fields: Vec<(&'static str, String)>,
    pub tier: StatusTier,
}

impl DetailView {
    /// Value of the field labelled `label`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl From<&VisitorRecord> for DetailView {
    fn from(record: &VisitorRecord) -> Self {
        let photo = match &record.photo {
            Some(url) => PhotoSlot::Image(url.clone()),
            None => PhotoSlot::Placeholder,
        };

        let fields = vec![
            ("ID", record.id.to_string()),
            ("Name", text(&record.name)),
            ("Visitor Type", text(&record.visitor_type)),
            ("Time In", text(&record.time_in)),
            ("Time Out", text(&record.time_out)),
            ("Purpose", text(&record.purpose)),
            ("Contact Person", text(&record.contact_person)),
            ("Location", text(&record.location)),
            (
                "Status",
                record
                    .status
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            ),
        ];

        Self {
            title: DETAIL_TITLE,
            photo,
            fields,
            tier: record.tier(),
        }
    }
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}
