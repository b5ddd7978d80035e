//! Remote search for Lookahead.
//!
//! - `source`: the [`SearchSource`] seam and record adapters
//! - `college`: the API college record and its adapter
//! - `http`: the ureq-backed HTTP source
//! - `fetcher`: [`ResultFetcher`], which windows results and tags every
//!   request with a version token for stale-response suppression

#![warn(missing_docs)]

pub mod college;
pub mod fetcher;
pub mod http;
pub mod source;

pub use college::{College, CollegeAdapter, CollegeItem, RecordId};
pub use fetcher::{FetchOutcome, FetchTicket, ResultFetcher};
pub use http::HttpSource;
pub use source::{HitAdapter, RecordAdapter, SearchSource};
