//! couchdb-lucene full-text search client
//!
//! This crate queries the couchdb-lucene companion service of a CouchDB
//! database and maps its JSON responses into typed results. It is a thin
//! adapter: query-language semantics, indexing and retry policy all belong to
//! the service and transport, not here.
//!
//! # Examples
//!
//! ## Run a search
//!
//! ```rust,no_run
//! use futon_lucene::{LuceneClient, LuceneQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LuceneClient::connect("http://localhost:5984", "articles")?;
//! let query = LuceneQuery::new("search", "by_title", "title:couch")
//!     .limit(10)
//!     .include_docs(true);
//! let result = client.query(&query).await?;
//! for row in &result.rows {
//!     println!("{:?} scored {}", row.id, row.score());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod models;
pub mod query;

pub use client::{LuceneClient, ReqwestTransport, Transport, TransportResponse};
pub use error::{Error, Result};
pub use models::{LuceneSearchResult, ResultRow};
pub use query::{BoundQuery, LuceneQuery, Operator};
