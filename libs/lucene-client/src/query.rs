//! Search request description and request-target rendering
//!
//! A [`LuceneQuery`] describes what to search for; it cannot be turned into a
//! request target on its own. [`LuceneQuery::bind`] attaches the resource path
//! of the database the search runs against and yields a [`BoundQuery`], the
//! only type that knows how to render a target. Binding is a pure step, so a
//! single query value can be bound against several databases without hidden
//! ordering requirements.

use urlencoding::encode;

/// Boolean operator applied between bare query terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

/// Description of a couchdb-lucene search request.
///
/// Carries the full couchdb-lucene parameter set. Only the design document,
/// index name and query text are mandatory; everything else is omitted from
/// the rendered target when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LuceneQuery {
    design_document: String,
    index: String,
    query: String,
    analyzer: Option<String>,
    callback: Option<String>,
    debug: Option<bool>,
    default_operator: Option<Operator>,
    force_json: Option<bool>,
    include_docs: Option<bool>,
    limit: Option<u32>,
    skip: Option<u32>,
    sort: Option<String>,
    stale_ok: bool,
}

impl LuceneQuery {
    /// Create a query against `index` in `design_document` with query text `q`.
    pub fn new(
        design_document: impl Into<String>,
        index: impl Into<String>,
        q: impl Into<String>,
    ) -> Self {
        Self {
            design_document: design_document.into(),
            index: index.into(),
            query: q.into(),
            ..Self::default()
        }
    }

    /// Override the analyzer used for this search.
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// JSONP callback name for the response.
    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Ask the service to echo its execution plan.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Operator applied between bare terms (the service defaults to OR).
    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.default_operator = Some(operator);
        self
    }

    /// Force a JSON content type on the response.
    pub fn force_json(mut self, force_json: bool) -> Self {
        self.force_json = Some(force_json);
        self
    }

    /// Include the full source document in each row.
    pub fn include_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = Some(include_docs);
        self
    }

    /// Maximum number of rows to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of leading matches to skip.
    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sort specification, e.g. `"\\published_at<date>"`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Accept a stale index instead of waiting for a refresh (`stale=ok`).
    pub fn stale_ok(mut self) -> Self {
        self.stale_ok = true;
        self
    }

    /// The raw query text.
    pub fn query_text(&self) -> &str {
        &self.query
    }

    /// True when the query is missing something it cannot be executed
    /// without: query text, design document or index name.
    pub fn is_degenerate(&self) -> bool {
        self.query.trim().is_empty()
            || self.design_document.trim().is_empty()
            || self.index.trim().is_empty()
    }

    /// Bind this query to a database resource path, yielding the value the
    /// executor renders into a request target.
    pub fn bind(&self, db_path: &str) -> BoundQuery {
        BoundQuery {
            db_path: format!("/{}", db_path.trim_matches('/')),
            query: self.clone(),
        }
    }
}

/// A [`LuceneQuery`] bound to a database resource path.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    db_path: String,
    query: LuceneQuery,
}

impl BoundQuery {
    /// The resource path this query was bound to.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Render the full request target, path plus encoded parameters.
    pub fn request_target(&self) -> String {
        let q = &self.query;
        let mut params = vec![format!("q={}", encode(&q.query))];

        if let Some(analyzer) = &q.analyzer {
            params.push(format!("analyzer={}", encode(analyzer)));
        }
        if let Some(callback) = &q.callback {
            params.push(format!("callback={}", encode(callback)));
        }
        if let Some(debug) = q.debug {
            params.push(format!("debug={}", debug));
        }
        if let Some(operator) = q.default_operator {
            params.push(format!("default_operator={}", operator.as_str()));
        }
        if let Some(force_json) = q.force_json {
            params.push(format!("force_json={}", force_json));
        }
        if let Some(include_docs) = q.include_docs {
            params.push(format!("include_docs={}", include_docs));
        }
        if let Some(limit) = q.limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(skip) = q.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(sort) = &q.sort {
            params.push(format!("sort={}", encode(sort)));
        }
        if q.stale_ok {
            params.push("stale=ok".to_string());
        }

        format!(
            "{}/_fti/_design/{}/{}?{}",
            self.db_path,
            encode(&q.design_document),
            encode(&q.index),
            params.join("&")
        )
    }
}
