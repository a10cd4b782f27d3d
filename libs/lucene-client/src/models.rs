//! Typed shape of a couchdb-lucene search response
//!
//! Optional scalars are `Option` internally; the sentinel accessors reproduce
//! the wire convention of `-1` for "not provided", which is unambiguous
//! because `-1` is not a legal value for any of these fields. Absent
//! attributes are omitted on re-encode instead of being written as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire value for integer and score fields the service did not provide.
const UNSET: i64 = -1;

/// The result of a full-text search, one per request/response exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LuceneSearchResult {
    /// Analyzer the index used while processing the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,

    /// Token reflecting the index version that served this search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Milliseconds spent retrieving documents.
    #[serde(rename = "fetch_duration", skip_serializing_if = "Option::is_none")]
    pub fetch_duration_ms: Option<i64>,

    /// Maximum number of rows the service was asked to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Query execution plan, present when debug output was requested.
    #[serde(rename = "plan", skip_serializing_if = "Option::is_none")]
    pub execution_plan: Option<String>,

    /// The query text as the service understood it.
    #[serde(rename = "q", skip_serializing_if = "Option::is_none")]
    pub query_text: Option<String>,

    /// Milliseconds spent performing the search itself.
    #[serde(rename = "search_duration", skip_serializing_if = "Option::is_none")]
    pub search_duration_ms: Option<i64>,

    /// Number of leading matches that were skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,

    /// Field/direction tokens describing how rows were sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<Vec<String>>,

    /// Total number of matches, independent of limit/skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<i64>,

    /// Matched rows in rank order. Empty when the payload carried none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<ResultRow>,
}

impl LuceneSearchResult {
    /// Milliseconds spent retrieving documents, `-1` when not reported.
    pub fn fetch_duration_ms(&self) -> i64 {
        self.fetch_duration_ms.unwrap_or(UNSET)
    }

    /// Row limit the search ran with, `-1` when not reported.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(UNSET)
    }

    /// Milliseconds spent searching, `-1` when not reported.
    pub fn search_duration_ms(&self) -> i64 {
        self.search_duration_ms.unwrap_or(UNSET)
    }

    /// Number of skipped matches, `-1` when not reported.
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(UNSET)
    }

    /// Total number of matches, `-1` when not reported.
    pub fn total_rows(&self) -> i64 {
        self.total_rows.unwrap_or(UNSET)
    }
}

/// One matched document in a search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Id of the matched document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Relevance score; higher is more relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,

    /// Sort-key values echoing the query's sort criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<Vec<String>>,

    /// Stored contents of the indexed fields. Values are whatever the index
    /// stored, including nested objects and arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,

    /// Full source document, present only when the query asked for
    /// `include_docs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<Map<String, Value>>,
}

impl ResultRow {
    /// Relevance score, `-1` when not reported. A literal `-1` on the wire is
    /// treated the same as an absent score.
    pub fn score(&self) -> f32 {
        self.score.unwrap_or(UNSET as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_result_is_all_unset() {
        let result = LuceneSearchResult::default();
        assert_eq!(result.fetch_duration_ms(), -1);
        assert_eq!(result.search_duration_ms(), -1);
        assert_eq!(result.limit(), -1);
        assert_eq!(result.skip(), -1);
        assert_eq!(result.total_rows(), -1);
        assert!(result.analyzer.is_none());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_wire_names_take_precedence() {
        let result: LuceneSearchResult = serde_json::from_value(json!({
            "fetch_duration": 12,
            "search_duration": 7,
            "q": "title:couch",
            "plan": "plan text",
            "total_rows": 3
        }))
        .unwrap();
        assert_eq!(result.fetch_duration_ms, Some(12));
        assert_eq!(result.search_duration_ms, Some(7));
        assert_eq!(result.query_text.as_deref(), Some("title:couch"));
        assert_eq!(result.execution_plan.as_deref(), Some("plan text"));
        assert_eq!(result.total_rows(), 3);
    }

    #[test]
    fn test_unset_row_score_is_sentinel() {
        let row = ResultRow::default();
        assert_eq!(row.score(), -1.0);
        let row: ResultRow = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert_eq!(row.score(), -1.0);
    }

    #[test]
    fn test_encode_omits_unset_attributes() {
        let encoded = serde_json::to_string(&LuceneSearchResult::default()).unwrap();
        assert_eq!(encoded, "{}");
    }
}
