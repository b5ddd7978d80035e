//! End-to-end search flows through the `lookahead` facade.
//!
//! ## Layout
//!
//! - **controller**: the sans-IO state machine driven by hand
//! - **search_box**: the async driver over a JSON-backed fake source
//! - **catalog**: listing, filtering and paging over a fake feed
//!
//! ```bash
//! cargo test --test search_flow
//! ```

mod test_utils;

mod catalog;
mod controller;
mod search_box;
