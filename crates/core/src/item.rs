//! Result items and pages.

use serde::{Deserialize, Serialize};

/// The narrow capability the search component needs from a result record.
///
/// Integration-specific shapes (API college objects, generic hits) are
/// adapted into this at the source boundary; the dropdown never inspects
/// anything else.
pub trait SearchItem: Clone + Send + Sync + 'static {
    /// Stable identifier passed to the selection callback.
    fn id(&self) -> &str;

    /// Name shown in the dropdown row.
    fn display_name(&self) -> &str;

    /// Optional thumbnail for the row.
    fn thumbnail_url(&self) -> Option<&str> {
        None
    }
}

/// A generic search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Hit {
    /// Create a hit without a thumbnail.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Hit {
            id: id.into(),
            name: name.into(),
            thumbnail: None,
        }
    }
}

impl SearchItem for Hit {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

/// Ordered items plus the 1-based page index that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage<T> {
    /// Page index (1-based).
    pub page: u32,
    /// Items, in remote order.
    pub items: Vec<T>,
}

impl<T> ResultPage<T> {
    /// Create a page.
    pub fn new(page: u32, items: Vec<T>) -> Self {
        ResultPage { page, items }
    }

    /// An empty page.
    pub fn empty(page: u32) -> Self {
        ResultPage {
            page,
            items: Vec::new(),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this page filled its whole window (`page * page_size`),
    /// which implies more results may exist.
    pub fn is_full(&self, page_size: usize) -> bool {
        self.items.len() >= self.page as usize * page_size
    }
}
