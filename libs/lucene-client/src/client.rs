//! Query execution against the couchdb-lucene service

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::codec;
use crate::error::{Error, Result};
use crate::models::LuceneSearchResult;
use crate::query::LuceneQuery;

/// What a transport hands back: status code plus raw body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound seam of the executor.
///
/// Production code uses [`ReqwestTransport`]; tests substitute an in-memory
/// double. Timeouts, pooling and any retry policy live behind this seam, and
/// transport failures are propagated unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, target: &str) -> Result<TransportResponse>;
}

/// [`Transport`] backed by a shared `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for the CouchDB server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, target: &str) -> Result<TransportResponse> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), target);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

/// Executes full-text searches against one database's lucene index.
///
/// The client owns the database resource path; each call binds the supplied
/// query to that path, so a query value can be reused across clients without
/// carrying stale state.
pub struct LuceneClient {
    transport: Arc<dyn Transport>,
    db_path: String,
}

impl LuceneClient {
    /// Create a client for `database` over an existing transport.
    pub fn new(transport: Arc<dyn Transport>, database: &str) -> Self {
        Self {
            transport,
            db_path: format!("/{}", database.trim_matches('/')),
        }
    }

    /// Convenience constructor wiring up a [`ReqwestTransport`] for the
    /// CouchDB server at `base_url`.
    pub fn connect(base_url: &str, database: &str) -> Result<Self> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(base_url)?), database))
    }

    /// The resource path queries are bound to.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Execute a search query against this database's index.
    ///
    /// Issues exactly one GET. Fails with [`Error::InvalidQuery`] before any
    /// I/O when the query is degenerate, [`Error::Remote`] on a non-success
    /// status, and [`Error::Mapping`] when the body does not decode.
    pub async fn query(&self, query: &LuceneQuery) -> Result<LuceneSearchResult> {
        if query.is_degenerate() {
            return Err(Error::InvalidQuery(
                "query text, design document and index name must be non-empty".to_string(),
            ));
        }

        let target = query.bind(&self.db_path).request_target();
        debug!(request = %target, "issuing full-text search");

        let response = self.transport.get(&target).await?;
        if !response.is_success() {
            return Err(Error::Remote {
                status: response.status,
                body: response.body,
            });
        }

        debug!(bytes = response.body.len(), "search response received");
        codec::decode(&response.body)
    }
}
