//! Validation of the visitor-listing response body.
//!
//! The endpoint is expected to return a JSON array of visitor objects. A
//! misrouted request often returns the front-end's HTML instead, sometimes
//! wrapped as a JSON string, so markup is detected before any parsing.

use serde_json::Value;
use tracing::{debug, warn};

use visitor_core::{FetchError, VisitorRecord};

use crate::client::snippet;

/// Turn a raw response body into the record list, or say why it isn't one.
///
/// Objects without an `id`/`_id` get a positional id (`row-<index>`).
/// Elements that still fail to convert, such as bare strings, are skipped
/// with a warning; the rest keep the server's order.
pub fn validate_payload(body: &str) -> Result<Vec<VisitorRecord>, FetchError> {
    if looks_like_markup(body) {
        return Err(FetchError::Markup {
            snippet: snippet(body).to_string(),
        });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Shape {
        message: format!("response is not JSON: {}", e),
    })?;

    let items = match value {
        Value::Array(items) => items,
        Value::String(ref text) if looks_like_markup(text) => {
            return Err(FetchError::Markup {
                snippet: snippet(text).to_string(),
            });
        }
        other => {
            return Err(FetchError::Shape {
                message: format!("expected a JSON array, got {}", json_kind(&other)),
            });
        }
    };

    let total = items.len();
    let records: Vec<VisitorRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, mut item)| {
            if let Value::Object(fields) = &mut item
                && !["id", "_id"]
                    .iter()
                    .any(|key| fields.get(*key).is_some_and(|v| !v.is_null()))
            {
                debug!(index, "Visitor record has no id; assigning a positional one");
                fields.insert("id".to_string(), Value::String(format!("row-{}", index)));
            }
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed visitor record");
                    None
                }
            }
        })
        .collect();

    debug!(total, kept = records.len(), "Validated visitor payload");
    Ok(records)
}

fn looks_like_markup(text: &str) -> bool {
    let head: String = text
        .trim_start_matches('\u{feff}')
        .trim_start()
        .chars()
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    ["<!doctype html", "<html", "<head", "<body"]
        .iter()
        .any(|tag| head.starts_with(tag))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visitor_core::FetchErrorKind;

    #[test]
    fn accepts_array_in_order() {
        let records = validate_payload(
            r#"[{"id": 2, "name": "Bea"}, {"id": 1, "name": "Alice"}, {"_id": "x", "name": "Cy"}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "x"]);
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(validate_payload("[]").unwrap().is_empty());
    }

    #[test]
    fn raw_html_is_markup() {
        let err = validate_payload("<!doctype html><html><body>Not Found</body></html>").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);

        let err = validate_payload("\n  <HTML><head></head></HTML>").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);

        let err = validate_payload("<!DOCTYPE html>\n<html lang=\"en\">").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);
    }

    #[test]
    fn bom_prefixed_and_fragment_pages_are_markup() {
        let err = validate_payload("\u{feff}<!doctype html><html></html>").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);

        let err = validate_payload("<head><title>502 Bad Gateway</title></head>").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);

        let err = validate_payload("<body><h1>Service Unavailable</h1></body>").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);
    }

    #[test]
    fn json_string_holding_html_is_markup() {
        let err = validate_payload(r#""<!doctype html><div id=\"root\"></div>""#).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Markup);
    }

    #[test]
    fn other_json_is_shape_error() {
        for body in [r#"{"error": "nope"}"#, r#""just text""#, "42", "null", "true"] {
            let err = validate_payload(body).unwrap_err();
            assert_eq!(err.kind(), FetchErrorKind::Shape, "{body}");
        }
        let err = validate_payload(r#"{"visitors": []}"#).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn non_json_is_shape_error() {
        let err = validate_payload("Internal Server Error").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Shape);
        assert!(validate_payload("").is_err());
    }

    #[test]
    fn non_object_elements_are_skipped() {
        let records = validate_payload(
            r#"[{"id": 1, "name": "Alice"}, "garbage", 7, {"id": 3, "name": null}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(records[1].name, None);
    }

    #[test]
    fn records_without_id_get_positional_id() {
        let records = validate_payload(
            r#"[{"name": "NoId", "purpose": "Walk-in"}, {"id": 1, "name": "Alice"}, {"_id": null, "name": "Nil"}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["row-0", "1", "row-2"]);
        assert_eq!(records[0].name.as_deref(), Some("NoId"));
    }
}
