//! Name search over a loaded catalog.

use crate::catalog::Catalog;
use crate::filter::contains;
use lookahead_core::{Query, Result};
use lookahead_fetch::{College, CollegeItem, SearchSource};

/// [`SearchSource`] that matches college names in memory.
///
/// A query matches every college whose name contains it, ignoring case.
/// Results keep catalog order.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    colleges: Vec<College>,
}

impl CatalogSource {
    /// Source over `colleges`.
    pub fn new(colleges: Vec<College>) -> Self {
        Self { colleges }
    }

    /// Source over every college in `catalog`, ignoring its filter.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.all().to_vec())
    }

    /// Number of searchable colleges.
    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    /// True if there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }
}

impl SearchSource for CatalogSource {
    type Item = CollegeItem;

    fn search(&self, query: &Query) -> Result<Vec<CollegeItem>> {
        let hits: Vec<CollegeItem> = self
            .colleges
            .iter()
            .filter(|c| contains(query.as_str(), Some(&c.name)))
            .cloned()
            .map(CollegeItem::from)
            .collect();
        tracing::debug!(
            target: "lookahead::catalog",
            query = %query,
            hits = hits.len(),
            "Catalog name search"
        );
        Ok(hits)
    }
}
