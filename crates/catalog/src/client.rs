//! Client for the college filter endpoint.

use lookahead_core::{CatalogConfig, Result};
use lookahead_fetch::http::{build_agent, get_json};
use lookahead_fetch::College;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Path of the paged filter endpoint.
pub const FILTER_PATH: &str = "/api/v1/colleges/filter";

/// Paged envelope returned by the filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse {
    /// Colleges on this page. Rows that do not decode are skipped.
    #[serde(deserialize_with = "decode_rows")]
    pub content: Vec<College>,
    /// Zero-based page number.
    #[serde(default)]
    pub page_number: u32,
    /// Requested page size.
    #[serde(default)]
    pub page_size: u32,
    /// Page count reported by the server.
    #[serde(default)]
    pub total_pages: u32,
    /// Record count reported by the server.
    #[serde(default)]
    pub total_elements: u64,
}

fn decode_rows<'de, D>(deserializer: D) -> std::result::Result<Vec<College>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = rows.len();
    let colleges: Vec<College> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(college) => Some(college),
            Err(e) => {
                tracing::debug!(target: "lookahead::catalog", error = %e, "Undecodable college row");
                None
            }
        })
        .collect();
    if colleges.len() < total {
        tracing::warn!(
            target: "lookahead::catalog",
            skipped = total - colleges.len(),
            "Skipped college rows without id or name"
        );
    }
    Ok(colleges)
}

/// Anything that can produce the full college list.
pub trait CollegeFeed: Send + Sync {
    /// Fetch every college.
    fn fetch_all(&self) -> Result<Vec<College>>;
}

/// HTTP client for the filter endpoint.
pub struct CatalogClient {
    agent: ureq::Agent,
    endpoint: String,
    fetch_size: usize,
}

impl CatalogClient {
    /// Client for the configured host.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            agent: build_agent(config.request_timeout()),
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), FILTER_PATH),
            fetch_size: config.fetch_size,
        }
    }

    /// Fetch one page of the filter endpoint.
    pub fn fetch_page(&self, page: u32, size: usize) -> Result<PagedResponse> {
        let page = page.to_string();
        let size = size.to_string();
        let body = get_json(
            &self.agent,
            &self.endpoint,
            &[("page", page.as_str()), ("size", size.as_str())],
        )?;
        Ok(serde_json::from_value(body)?)
    }
}

impl CollegeFeed for CatalogClient {
    /// Requests page 0 with a size large enough to hold the whole catalog.
    fn fetch_all(&self) -> Result<Vec<College>> {
        let response = self.fetch_page(0, self.fetch_size)?;
        if response.total_elements > response.content.len() as u64 {
            tracing::warn!(
                target: "lookahead::catalog",
                received = response.content.len(),
                total = response.total_elements,
                "Catalog truncated by fetch size"
            );
        }
        Ok(response.content)
    }
}
