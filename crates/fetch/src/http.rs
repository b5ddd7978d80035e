//! HTTP search source backed by ureq.

use crate::college::CollegeAdapter;
use crate::source::{RecordAdapter, SearchSource};
use lookahead_core::{Error, Query, Result, SearchConfig};
use serde_json::Value;
use std::time::Duration;

/// Path of the college search endpoint.
pub const SEARCH_PATH: &str = "/api/v1/colleges/search";

/// Build an agent with a whole-request timeout.
pub fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(timeout).build()
}

/// GET `url` with query parameters and decode the body as JSON.
pub fn get_json(agent: &ureq::Agent, url: &str, params: &[(&str, &str)]) -> Result<Value> {
    let mut request = agent.get(url);
    for (key, value) in params {
        request = request.query(key, value);
    }
    let response = request.call().map_err(map_ureq_error)?;
    response.into_json::<Value>().map_err(|e| Error::Malformed {
        reason: e.to_string(),
    })
}

fn map_ureq_error(e: ureq::Error) -> Error {
    match e {
        ureq::Error::Status(status, _) => Error::Status { status },
        ureq::Error::Transport(t) => Error::Transport {
            reason: t.to_string(),
        },
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Adapt a response body that must be a JSON array.
///
/// Records the adapter rejects are skipped; a non-array body is malformed.
pub fn parse_records<A: RecordAdapter>(body: Value, adapter: &A) -> Result<Vec<A::Item>> {
    let records = match body {
        Value::Array(records) => records,
        other => {
            return Err(Error::Malformed {
                reason: format!("expected JSON array, got {}", json_kind(&other)),
            })
        }
    };

    let total = records.len();
    let items: Vec<A::Item> = records
        .into_iter()
        .filter_map(|record| adapter.adapt(record))
        .collect();
    if items.len() < total {
        tracing::warn!(
            target: "lookahead::fetch",
            skipped = total - items.len(),
            "Skipped records without id or name"
        );
    }
    Ok(items)
}

/// Search source that queries `{base_url}{path}?query=...`.
pub struct HttpSource<A: RecordAdapter = CollegeAdapter> {
    agent: ureq::Agent,
    endpoint: String,
    adapter: A,
}

impl HttpSource<CollegeAdapter> {
    /// Source for the portal's college search endpoint.
    pub fn colleges(config: &SearchConfig) -> Self {
        Self::new(config, SEARCH_PATH, CollegeAdapter)
    }
}

impl<A: RecordAdapter> HttpSource<A> {
    /// Source for an arbitrary path on the configured host.
    pub fn new(config: &SearchConfig, path: &str, adapter: A) -> Self {
        Self {
            agent: build_agent(config.request_timeout()),
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), path),
            adapter,
        }
    }

    /// Full endpoint URL (without the query string).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl<A: RecordAdapter> SearchSource for HttpSource<A> {
    type Item = A::Item;

    fn search(&self, query: &Query) -> Result<Vec<Self::Item>> {
        let body = get_json(&self.agent, &self.endpoint, &[("query", query.as_str())])?;
        parse_records(body, &self.adapter)
    }
}
