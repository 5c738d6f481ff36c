//! Field-value helpers shared by every component.
//!
//! Entities are schemaless, so values arrive as `serde_json::Value`. These
//! helpers define the contract for reading them: how a value renders to text
//! for token counting, when it is numeric, when it parses as a timestamp,
//! when it counts as "empty" for merge purposes, and how it keys identity.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Textual rendering of a field value for token counting.
///
/// Text renders as-is, numbers and booleans via their display form, nested
/// structures as compact JSON. `None` means the value contributes nothing
/// (null fields cost 0 tokens).
pub fn render_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        nested => Some(Cow::Owned(nested.to_string())),
    }
}

/// Numeric reading of a field value.
///
/// Accepts JSON numbers and numeric text (scores often arrive stringly from
/// upstream systems). Anything else is `None`.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Timestamp reading of a field value.
///
/// Accepts RFC 3339 text (with offset or `Z`), naive datetimes, and plain
/// dates (midnight UTC). Unparsable values are `None` — a bad date on one
/// entity must never fail a batch.
pub fn timestamp_value(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Whether a value counts as empty for merge-enrichment purposes.
///
/// Null and empty text are empty; everything else (including 0 and false)
/// is a real value a survivor should keep.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Deterministic identity key for deduplication.
///
/// Text values are prefixed so `"1"` and `1` never collide.
pub fn identity_key(value: &Value) -> String {
    match value {
        Value::String(s) => format!("s:{s}"),
        other => other.to_string(),
    }
}
