//! Executor tests against an in-memory transport double.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use futon_lucene::{Error, LuceneClient, LuceneQuery, Result, Transport, TransportResponse};

/// Transport double that records every request target and serves a canned
/// response.
struct FakeTransport {
    targets: Mutex<Vec<String>>,
    response: TransportResponse,
}

impl FakeTransport {
    fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            targets: Mutex::new(Vec::new()),
            response: TransportResponse {
                status,
                body: body.to_string(),
            },
        })
    }

    fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, target: &str) -> Result<TransportResponse> {
        self.targets.lock().unwrap().push(target.to_string());
        Ok(self.response.clone())
    }
}

#[tokio::test]
async fn query_issues_exactly_one_get_including_db_path() -> anyhow::Result<()> {
    let transport = FakeTransport::new(200, r#"{"total_rows":0}"#);
    let client = LuceneClient::new(transport.clone(), "articles");

    let result = client
        .query(&LuceneQuery::new("search", "by_title", "title:couch"))
        .await?;
    assert_eq!(result.total_rows(), 0);

    let targets = transport.targets();
    assert_eq!(targets.len(), 1);
    assert!(targets[0].starts_with("/articles/_fti/_design/search/by_title?"));
    assert!(targets[0].contains("q=title%3Acouch"));
    Ok(())
}

#[tokio::test]
async fn degenerate_query_fails_before_any_io() {
    let transport = FakeTransport::new(200, r#"{"total_rows":0}"#);
    let client = LuceneClient::new(transport.clone(), "articles");

    let err = client
        .query(&LuceneQuery::new("search", "by_title", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidQuery(_)));
    assert!(transport.targets().is_empty());
}

#[tokio::test]
async fn non_success_status_yields_remote_error() {
    let transport = FakeTransport::new(500, "index is rebuilding");
    let client = LuceneClient::new(transport, "articles");

    let err = client
        .query(&LuceneQuery::new("search", "by_title", "x"))
        .await
        .unwrap_err();

    match err {
        Error::Remote { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "index is rebuilding");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_status_yields_remote_error_too() {
    let transport = FakeTransport::new(404, r#"{"error":"not_found"}"#);
    let client = LuceneClient::new(transport, "articles");

    let err = client
        .query(&LuceneQuery::new("search", "by_title", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Remote { status: 404, .. }));
}

#[tokio::test]
async fn unparseable_success_body_yields_mapping_error() {
    let transport = FakeTransport::new(200, "<html>gateway error</html>");
    let client = LuceneClient::new(transport, "articles");

    let err = client
        .query(&LuceneQuery::new("search", "by_title", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Mapping(_)));
}

#[tokio::test]
async fn same_query_value_binds_per_client() -> anyhow::Result<()> {
    let query = LuceneQuery::new("search", "by_title", "x");

    let first = FakeTransport::new(200, "{}");
    let second = FakeTransport::new(200, "{}");
    LuceneClient::new(first.clone(), "articles")
        .query(&query)
        .await?;
    LuceneClient::new(second.clone(), "archive")
        .query(&query)
        .await?;

    assert!(first.targets()[0].starts_with("/articles/"));
    assert!(second.targets()[0].starts_with("/archive/"));
    Ok(())
}

#[tokio::test]
async fn response_rows_preserve_rank_order() -> anyhow::Result<()> {
    let body = r#"{
        "total_rows": 3,
        "rows": [
            {"id": "best", "score": 2.4},
            {"id": "mid", "score": 1.1},
            {"id": "last", "score": 0.3}
        ]
    }"#;
    let transport = FakeTransport::new(200, body);
    let client = LuceneClient::new(transport, "articles");

    let result = client
        .query(&LuceneQuery::new("search", "by_title", "x"))
        .await?;
    let ids: Vec<_> = result.rows.iter().filter_map(|r| r.id.as_deref()).collect();
    assert_eq!(ids, vec!["best", "mid", "last"]);
    Ok(())
}
