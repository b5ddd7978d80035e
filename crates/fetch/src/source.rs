//! Search source seam and record adapters.

use lookahead_core::{Hit, Query, Result, SearchItem};
use serde_json::Value;
use std::sync::Arc;

/// A backend that answers a free-text query with a flat, ordered list.
///
/// Implementations block; the session driver runs them off the event loop.
pub trait SearchSource: Send + Sync + 'static {
    /// Item type produced after adaptation.
    type Item: SearchItem;

    /// Run one request for `query`. Never called with an empty query.
    fn search(&self, query: &Query) -> Result<Vec<Self::Item>>;
}

impl<S: SearchSource> SearchSource for Arc<S> {
    type Item = S::Item;

    fn search(&self, query: &Query) -> Result<Vec<Self::Item>> {
        (**self).search(query)
    }
}

/// Maps one raw JSON record into a [`SearchItem`].
pub trait RecordAdapter: Send + Sync + 'static {
    /// Adapted item type.
    type Item: SearchItem;

    /// Adapt a record, or `None` if it lacks the required fields.
    fn adapt(&self, record: Value) -> Option<Self::Item>;
}

/// Adapter for generic `{id, name, thumbnail?}` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAdapter;

impl RecordAdapter for HitAdapter {
    type Item = Hit;

    fn adapt(&self, record: Value) -> Option<Hit> {
        let name = record.get("name")?.as_str()?.to_string();
        let id = match record.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let thumbnail = record
            .get("thumbnail")
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(Hit {
            id,
            name,
            thumbnail,
        })
    }
}
