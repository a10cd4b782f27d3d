//! JSON mapping rules for search responses
//!
//! Defined once so that mapping behavior is deterministic and testable
//! independent of any one call site. Decoding accepts the non-strict JSON
//! some couchdb-lucene deployments emit (comments, single-quoted strings);
//! encoding is strict JSON that omits unset attributes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::error::Result;
use crate::models::LuceneSearchResult;

/// Decode a response body into a search result.
///
/// The body is parsed as JSON5, a superset of JSON, so `//` and `/* */`
/// comments and single-quoted strings decode the same as their strict form.
pub fn decode(body: &str) -> Result<LuceneSearchResult> {
    Ok(json5::from_str(body)?)
}

/// Encode a search result back to JSON text, for fixtures and logging.
/// Unset attributes are omitted rather than written as explicit `null`.
pub fn encode(result: &LuceneSearchResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

/// Render a date-time as a stored-field or document value.
///
/// Dates cross the service boundary as ISO-8601 text, never as numeric
/// timestamps, so the wire format stays stable across service versions.
pub fn datetime_value(dt: &DateTime<Utc>) -> Value {
    Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Read an ISO-8601 date-time back out of a stored-field or document value.
/// Returns `None` for non-string values and non-ISO-8601 text.
pub fn datetime_from_value(value: &Value) -> Option<DateTime<Utc>> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
