//! Visit status and its display tier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a visit as reported by the store.
///
/// Unrecognized values are kept verbatim in [`VisitorStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorStatus {
    Pending,
    Active,
    Completed,
    Other(String),
}

impl VisitorStatus {
    /// Parse a raw status string. Matching is exact, like the store emits it.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => VisitorStatus::Pending,
            "active" => VisitorStatus::Active,
            "completed" => VisitorStatus::Completed,
            other => VisitorStatus::Other(other.to_string()),
        }
    }

    /// Returns the raw status string.
    pub fn as_str(&self) -> &str {
        match self {
            VisitorStatus::Pending => "pending",
            VisitorStatus::Active => "active",
            VisitorStatus::Completed => "completed",
            VisitorStatus::Other(raw) => raw,
        }
    }

    /// Returns the display tier for this status.
    pub fn tier(&self) -> StatusTier {
        StatusTier::for_status(self.as_str())
    }
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VisitorStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VisitorStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(VisitorStatus::parse(&raw))
    }
}

/// Visual emphasis category derived from a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Warning,
    Primary,
    Success,
    Neutral,
}

impl StatusTier {
    /// Map any status string to its tier. Total: unknown strings are neutral.
    pub fn for_status(status: &str) -> Self {
        match status {
            "pending" => StatusTier::Warning,
            "active" => StatusTier::Primary,
            "completed" => StatusTier::Success,
            _ => StatusTier::Neutral,
        }
    }

    /// Tier for an optional status; absent status is neutral.
    pub fn for_optional(status: Option<&VisitorStatus>) -> Self {
        status.map_or(StatusTier::Neutral, VisitorStatus::tier)
    }
}
