//! Result fetcher with stale-response suppression.
//!
//! Every dispatch takes the next value of a monotonic version counter. A
//! response is current only if no newer dispatch (or invalidation) happened
//! after it was issued. Transport calls are never aborted; late results are
//! simply recognized as stale when they arrive.
//!
//! The remote endpoint returns its whole result list on every call, so a
//! request for page `n` fetches everything and keeps the first
//! `n * page_size` items.

use crate::source::SearchSource;
use lookahead_core::{Error, Query, ResultPage};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    version: u64,
    query: Query,
    page: u32,
}

impl FetchTicket {
    /// Version token assigned at dispatch.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Query the request was issued for.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Requested page (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Result of running a ticket.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// Ticket that produced this outcome.
    pub ticket: FetchTicket,
    /// Windowed items; empty on failure.
    pub page: ResultPage<T>,
    /// Recoverable failure, if the request failed.
    pub error: Option<Error>,
}

impl<T> FetchOutcome<T> {
    /// True if the request failed and `page` is a stand-in empty page.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Issues windowed requests against a [`SearchSource`].
pub struct ResultFetcher<S: SearchSource> {
    source: S,
    page_size: usize,
    latest: AtomicU64,
}

impl<S: SearchSource> ResultFetcher<S> {
    /// Create a fetcher. `page_size` is clamped to at least 1.
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            latest: AtomicU64::new(0),
        }
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items requested for `page`.
    pub fn window(&self, page: u32) -> usize {
        (page.max(1) as usize).saturating_mul(self.page_size)
    }

    /// Register a new request, superseding every earlier ticket.
    pub fn dispatch(&self, query: Query, page: u32) -> FetchTicket {
        let version = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let page = page.max(1);
        tracing::debug!(target: "lookahead::fetch", query = %query, page, version, "Dispatching search");
        FetchTicket {
            version,
            query,
            page,
        }
    }

    /// Supersede every outstanding ticket without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    /// Whether `ticket` is still the latest dispatch.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.version
    }

    /// Perform exactly one source request for `ticket`.
    ///
    /// Failures become an empty page with `error` set; this never panics
    /// and never returns an `Err`.
    pub fn fetch(&self, ticket: &FetchTicket) -> FetchOutcome<S::Item> {
        let window = self.window(ticket.page);
        match self.source.search(&ticket.query) {
            Ok(mut items) => {
                items.truncate(window);
                FetchOutcome {
                    ticket: ticket.clone(),
                    page: ResultPage::new(ticket.page, items),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(
                    target: "lookahead::fetch",
                    query = %ticket.query,
                    page = ticket.page,
                    error = %e,
                    "Search request failed, showing no results"
                );
                FetchOutcome {
                    ticket: ticket.clone(),
                    page: ResultPage::empty(ticket.page),
                    error: Some(e),
                }
            }
        }
    }
}
