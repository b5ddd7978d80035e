//! Lookahead: debounced, paginated type-ahead search for a college portal.
//!
//! ```no_run
//! use lookahead::{HttpSource, SearchBox, SearchCallbacks, SearchConfig, StaticIdentity};
//!
//! # async fn demo() -> lookahead::Result<()> {
//! let config = SearchConfig::default();
//! let search = SearchBox::spawn(
//!     &config,
//!     HttpSource::colleges(&config),
//!     &StaticIdentity::new("visitor"),
//!     SearchCallbacks::default(),
//! );
//! search.input("stan").ok();
//! let view = search.wait_for(|v| v.visible && !v.loading).await.ok();
//! # let _ = view;
//! # Ok(())
//! # }
//! ```
//!
//! The member crates are:
//! - `lookahead-core`: configuration, errors, identity, item capability
//! - `lookahead-fetch`: search sources and the versioned result fetcher
//! - `lookahead-session`: debouncer, dropdown state machine, async driver
//! - `lookahead-catalog`: catalog listing with filters, pagination, cache

#![warn(missing_docs)]

mod types;

pub use types::*;
