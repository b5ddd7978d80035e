//! Dropdown controller: the state machine owning one search session.
//!
//! ```text
//! Idle --keystroke--> Debouncing --settled--> Loading --resolved--> Settled
//!   ^                                                         |   ^
//!   |                                       near bottom + full |   | resolved
//!   |                                                         v   |
//!   +------------- clear / dismiss (from any state) ------ LoadingMore
//! ```
//!
//! The controller performs no I/O. It hands out [`FetchTicket`]s that the
//! driver runs through the shared [`ResultFetcher`] and feeds back via
//! [`DropdownController::on_fetch_complete`]. A completion is applied only if
//! its ticket is both the session's in-flight ticket and the fetcher's
//! latest dispatch; everything else is a stale response and is dropped.

use crate::event::{Key, PointerTarget, ScrollMetrics};
use crate::view::DropdownView;
use lookahead_core::{Query, SearchItem};
use lookahead_fetch::{FetchOutcome, FetchTicket, ResultFetcher, SearchSource};
use std::sync::Arc;

/// Where the search box is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session.
    Idle,
    /// Typing; waiting for the input to settle.
    Debouncing,
    /// First page requested.
    Loading,
    /// Latest request resolved.
    Settled {
        /// Whether the session holds any results.
        has_results: bool,
    },
    /// A further page requested after scrolling.
    LoadingMore,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed.
    Ignored,
    /// The dropdown was open and is now closed.
    Dismissed,
    /// The caller should run its submit handler with this query.
    Submit(Query),
}

struct Session<T> {
    query: Query,
    /// Highest page whose response has been applied.
    loaded_page: u32,
    results: Vec<T>,
    more_available: bool,
    in_flight: Option<FetchTicket>,
    last_error: Option<String>,
}

impl<T> Session<T> {
    fn new(query: Query) -> Self {
        Self {
            query,
            loaded_page: 0,
            results: Vec::new(),
            more_available: false,
            in_flight: None,
            last_error: None,
        }
    }
}

/// Owns visibility, paging and dismissal for one search box.
pub struct DropdownController<S: SearchSource> {
    fetcher: Arc<ResultFetcher<S>>,
    scroll_threshold: f64,
    input: String,
    phase: Phase,
    visible: bool,
    session: Option<Session<S::Item>>,
}

impl<S: SearchSource> DropdownController<S> {
    /// Create a controller over `fetcher`.
    pub fn new(fetcher: Arc<ResultFetcher<S>>, scroll_threshold_px: u32) -> Self {
        Self {
            fetcher,
            scroll_threshold: f64::from(scroll_threshold_px),
            input: String::new(),
            phase: Phase::Idle,
            visible: false,
            session: None,
        }
    }

    /// The fetcher tickets must be run against.
    pub fn fetcher(&self) -> Arc<ResultFetcher<S>> {
        Arc::clone(&self.fetcher)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the dropdown region is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True while the session's latest request is unresolved.
    pub fn is_loading(&self) -> bool {
        self.session
            .as_ref()
            .map_or(false, |s| s.in_flight.is_some())
    }

    /// Query of the live session, if any.
    pub fn query(&self) -> Option<&Query> {
        self.session.as_ref().map(|s| &s.query)
    }

    /// Current page of the live session (0 before the first response).
    pub fn page(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.loaded_page)
    }

    /// Accumulated results of the live session.
    pub fn results(&self) -> &[S::Item] {
        self.session.as_ref().map_or(&[], |s| s.results.as_slice())
    }

    /// Record a new raw input value and return the query to debounce.
    ///
    /// Any keystroke that will settle into a new session, or clear the one
    /// shown, moves the phase to `Debouncing`. A response still in flight
    /// lands its rows but leaves the phase alone.
    pub fn on_input(&mut self, raw: &str) -> Query {
        self.input = raw.to_string();
        let query = Query::new(raw);
        if !query.is_empty() || self.session.is_some() {
            self.phase = Phase::Debouncing;
        }
        query
    }

    /// Handle a debounced query. An empty query clears the session; any
    /// other query starts a new session at page 1 and opens the dropdown.
    pub fn on_settled(&mut self, query: Query) -> Option<FetchTicket> {
        if query.is_empty() {
            self.clear();
            return None;
        }

        let ticket = self.fetcher.dispatch(query.clone(), 1);
        let mut session = Session::new(query);
        session.in_flight = Some(ticket.clone());
        self.session = Some(session);
        self.visible = true;
        self.phase = Phase::Loading;
        Some(ticket)
    }

    /// Apply a resolved request. Returns `false` if the outcome was stale.
    pub fn on_fetch_complete(&mut self, outcome: FetchOutcome<S::Item>) -> bool {
        let current = self.fetcher.is_current(&outcome.ticket);
        let session = match self.session.as_mut() {
            Some(s)
                if current
                    && s.query == *outcome.ticket.query()
                    && s.in_flight.as_ref() == Some(&outcome.ticket) =>
            {
                s
            }
            _ => {
                tracing::debug!(
                    target: "lookahead::session",
                    query = %outcome.ticket.query(),
                    version = outcome.ticket.version(),
                    "Discarding stale response"
                );
                return false;
            }
        };

        let page_size = self.fetcher.page_size();
        session.more_available = outcome.page.is_full(page_size);
        session.loaded_page = outcome.ticket.page();
        session.in_flight = None;
        session.last_error = outcome.error.map(|e| e.to_string());

        let already = session.results.len();
        session
            .results
            .extend(outcome.page.items.into_iter().skip(already));

        if self.phase != Phase::Debouncing {
            self.phase = Phase::Settled {
                has_results: !session.results.is_empty(),
            };
        }
        true
    }

    /// Request the next page when scrolled near the bottom and more results
    /// may exist. Never requests while another page is in flight.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<FetchTicket> {
        if !self.visible || metrics.distance_from_bottom() > self.scroll_threshold {
            return None;
        }
        let session = self.session.as_mut()?;
        if session.in_flight.is_some() || !session.more_available {
            return None;
        }

        let ticket = self
            .fetcher
            .dispatch(session.query.clone(), session.loaded_page + 1);
        session.in_flight = Some(ticket.clone());
        self.phase = Phase::LoadingMore;
        Some(ticket)
    }

    /// Close on a pointer-down outside both the input and the dropdown.
    /// Returns `true` if the dropdown was closed.
    pub fn on_pointer_down(&mut self, target: PointerTarget) -> bool {
        if !self.visible || target != PointerTarget::Outside {
            return false;
        }
        self.dismiss();
        true
    }

    /// Escape dismisses; Enter asks the caller to submit the input.
    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Escape if self.visible => {
                self.dismiss();
                KeyOutcome::Dismissed
            }
            Key::Enter => match Query::non_empty(&self.input) {
                Some(query) => KeyOutcome::Submit(query),
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// Pick the row at `index`, closing the dropdown.
    pub fn select(&mut self, index: usize) -> Option<S::Item> {
        if !self.visible {
            return None;
        }
        let item = self.session.as_ref()?.results.get(index)?.clone();
        self.dismiss();
        Some(item)
    }

    /// Close the dropdown and discard the session.
    pub fn dismiss(&mut self) {
        if self.session.is_some() {
            tracing::debug!(target: "lookahead::session", "Dismissing search session");
        }
        self.reset();
    }

    fn clear(&mut self) {
        if self.session.is_some() {
            tracing::debug!(target: "lookahead::session", "Query cleared");
        }
        self.reset();
    }

    fn reset(&mut self) {
        if self.is_loading() {
            self.fetcher.invalidate();
        }
        self.session = None;
        self.visible = false;
        self.phase = Phase::Idle;
    }

    /// Display name of the row at `index`.
    pub fn row_name(&self, index: usize) -> Option<&str> {
        self.results().get(index).map(SearchItem::display_name)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> DropdownView<S::Item> {
        DropdownView {
            input: self.input.clone(),
            query: self.query().cloned().unwrap_or_default(),
            phase: self.phase,
            visible: self.visible,
            loading: self.is_loading(),
            items: self.results().to_vec(),
            error: self.session.as_ref().and_then(|s| s.last_error.clone()),
        }
    }
}
