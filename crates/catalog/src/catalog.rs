//! The colleges listing: full list, active filter and current page.

use crate::cache::TimedCache;
use crate::client::CollegeFeed;
use crate::filter::CollegeFilter;
use crate::paginate::Paginator;
use lookahead_core::Result;
use lookahead_fetch::College;

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from a fresh cache entry.
    Cache,
    /// Fetched from the feed.
    Network,
}

/// In-memory college listing.
#[derive(Debug, Clone)]
pub struct Catalog {
    colleges: Vec<College>,
    filter: CollegeFilter,
    /// Indices into `colleges` that pass `filter`.
    visible: Vec<usize>,
    pages: Paginator,
    origin: Origin,
}

impl Catalog {
    /// Build from an already-loaded list.
    pub fn from_colleges(colleges: Vec<College>, page_size: usize) -> Self {
        Self::with_origin(colleges, page_size, Origin::Network)
    }

    fn with_origin(colleges: Vec<College>, page_size: usize, origin: Origin) -> Self {
        let visible = (0..colleges.len()).collect::<Vec<_>>();
        let pages = Paginator::new(page_size, visible.len());
        Self {
            colleges,
            filter: CollegeFilter::default(),
            visible,
            pages,
            origin,
        }
    }

    /// Load from `cache` when it holds a fresh entry, otherwise fetch from
    /// `feed` and store the result.
    ///
    /// A failed cache write is logged and does not fail the load.
    pub fn load(
        feed: &dyn CollegeFeed,
        cache: Option<&TimedCache<Vec<College>>>,
        page_size: usize,
    ) -> Result<Self> {
        if let Some(colleges) = cache.and_then(TimedCache::load) {
            tracing::debug!(
                target: "lookahead::catalog",
                count = colleges.len(),
                "Catalog served from cache"
            );
            return Ok(Self::with_origin(colleges, page_size, Origin::Cache));
        }

        let colleges = feed.fetch_all()?;
        tracing::info!(
            target: "lookahead::catalog",
            count = colleges.len(),
            "Catalog fetched"
        );
        if let Some(cache) = cache {
            if let Err(e) = cache.store(&colleges) {
                tracing::warn!(
                    target: "lookahead::catalog",
                    path = %cache.path().display(),
                    error = %e,
                    "Failed to write catalog cache"
                );
            }
        }
        Ok(Self::with_origin(colleges, page_size, Origin::Network))
    }

    /// Where the data came from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Every college, unfiltered.
    pub fn all(&self) -> &[College] {
        &self.colleges
    }

    /// Active filter.
    pub fn filter(&self) -> &CollegeFilter {
        &self.filter
    }

    /// Number of colleges passing the filter.
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Colleges passing the filter, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &College> + '_ {
        self.visible.iter().map(move |&i| &self.colleges[i])
    }

    /// Replace the filter and go back to the first page.
    pub fn apply_filter(&mut self, filter: CollegeFilter) {
        self.visible = self
            .colleges
            .iter()
            .enumerate()
            .filter(|(_, c)| filter.matches(c))
            .map(|(i, _)| i)
            .collect();
        self.filter = filter;
        self.pages.reset(self.visible.len());
    }

    /// Drop every filter criterion.
    pub fn reset_filter(&mut self) {
        self.apply_filter(CollegeFilter::default());
    }

    /// Pagination state.
    pub fn paginator(&self) -> &Paginator {
        &self.pages
    }

    /// Move to a zero-based page; out-of-range pages are ignored.
    pub fn set_page(&mut self, page: usize) -> bool {
        self.pages.set_page(page)
    }

    /// Colleges on the current page.
    pub fn page(&self) -> Vec<&College> {
        self.visible[self.pages.range()]
            .iter()
            .map(|&i| &self.colleges[i])
            .collect()
    }
}
