//! Search sessions for Lookahead
//!
//! This crate contains:
//! - `debounce`: the cancellable input debouncer
//! - `controller`: the dropdown state machine that owns a search session
//! - `event`: pointer, key and scroll inputs
//! - `view`: read-only snapshots for rendering
//! - `search_box`: the tokio driver tying the three together
//!
//! Sessions are never shared: every [`SearchBox`] owns its controller, its
//! debouncer and its fetcher.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod debounce;
pub mod error;
pub mod event;
pub mod search_box;
pub mod view;

pub use controller::{DropdownController, KeyOutcome, Phase};
pub use debounce::{Debouncer, Settled};
pub use error::{Error, Result};
pub use event::{Key, PointerTarget, ScrollMetrics, SearchEvent};
pub use search_box::{SearchBox, SearchCallbacks};
pub use view::{DropdownView, EMPTY_STATE_TEXT, LOADING_TEXT};
