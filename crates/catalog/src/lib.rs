//! College catalog browsing.
//!
//! The colleges listing fetches the whole catalog once, then filters and
//! paginates on the client. This crate provides:
//! - `client`: the filter-endpoint client and the [`CollegeFeed`] seam
//! - `filter`: tier, type, recommendation, location and name filters
//! - `paginate`: clamped, zero-based pagination
//! - `cache`: a JSON file cache with a fixed lifetime
//! - `catalog`: [`Catalog`], which ties them together
//! - `source`: [`CatalogSource`], name search over a loaded catalog

#![warn(missing_docs)]

pub mod cache;
pub mod catalog;
pub mod client;
pub mod filter;
pub mod paginate;
pub mod source;

pub use cache::TimedCache;
pub use catalog::{Catalog, Origin};
pub use client::{CatalogClient, CollegeFeed, PagedResponse};
pub use filter::CollegeFilter;
pub use paginate::Paginator;
pub use source::CatalogSource;
