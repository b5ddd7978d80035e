//! Search query type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable, trimmed search query.
///
/// The empty query is the "no active search" state: it never reaches the
/// network and clears any live session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Query(String);

impl Query {
    /// Build a query from raw input, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Query(raw.trim().to_string())
    }

    /// Build a query, returning `None` if it is empty after trimming.
    pub fn non_empty(raw: &str) -> Option<Self> {
        let q = Self::new(raw);
        if q.is_empty() {
            None
        } else {
            Some(q)
        }
    }

    /// The empty query.
    pub fn empty() -> Self {
        Query(String::new())
    }

    /// True if this is the "no active search" state.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query::new(raw)
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Query::new(&raw)
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.0
    }
}
