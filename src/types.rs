//! Public types for the Lookahead facade.
//!
//! This module re-exports types from the member crates with a flat public
//! interface.

// ============================================================================
// Configuration, errors and identity
// ============================================================================

pub use lookahead_core::{CatalogConfig, Config, SearchConfig};
pub use lookahead_core::{Error, Result};
pub use lookahead_core::{FileIdentity, IdentityProvider, StaticIdentity};

// ============================================================================
// Items and queries
// ============================================================================

pub use lookahead_core::{Hit, Query, ResultPage, SearchItem};
pub use lookahead_fetch::{College, CollegeItem, RecordId};

// ============================================================================
// Fetching
// ============================================================================

pub use lookahead_fetch::{CollegeAdapter, HitAdapter, RecordAdapter};
pub use lookahead_fetch::{FetchOutcome, FetchTicket, ResultFetcher};
pub use lookahead_fetch::{HttpSource, SearchSource};

// ============================================================================
// Search box
// ============================================================================

pub use lookahead_session::{Debouncer, DropdownController, KeyOutcome, Phase, Settled};
pub use lookahead_session::{DropdownView, EMPTY_STATE_TEXT, LOADING_TEXT};
pub use lookahead_session::{Key, PointerTarget, ScrollMetrics, SearchEvent};
pub use lookahead_session::{SearchBox, SearchCallbacks};

// ============================================================================
// Catalog
// ============================================================================

pub use lookahead_catalog::{Catalog, CatalogClient, CollegeFeed, CollegeFilter, Origin};
pub use lookahead_catalog::{CatalogSource, PagedResponse, Paginator, TimedCache};
