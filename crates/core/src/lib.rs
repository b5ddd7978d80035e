//! Core types for Lookahead
//!
//! This crate contains the vocabulary shared by every other crate:
//! - `query`: trimmed search queries with a distinguished empty state
//! - `item`: the narrow `SearchItem` capability and `ResultPage`
//! - `config`: search and catalog configuration (TOML)
//! - `identity`: the anonymous visitor identity provider
//! - `error`: the shared error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod identity;
pub mod item;
pub mod query;

pub use config::{CatalogConfig, Config, SearchConfig};
pub use error::{Error, Result};
pub use identity::{FileIdentity, IdentityProvider, StaticIdentity};
pub use item::{Hit, ResultPage, SearchItem};
pub use query::Query;
