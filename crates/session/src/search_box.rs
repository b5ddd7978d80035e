//! Async search box driver.
//!
//! A [`SearchBox`] is a tokio task that owns one [`DropdownController`], one
//! [`Debouncer`] and one [`ResultFetcher`]. Input arrives as
//! [`SearchEvent`]s over an unbounded channel and every processed event
//! republishes a [`DropdownView`] on a `watch` channel. Source requests
//! block, so they run on the blocking pool and report back through a
//! completion channel; the event loop itself never waits on the network.
//!
//! Dropping the handle stops the loop, which drops the debouncer and aborts
//! its pending timer. Requests already on the blocking pool finish on their
//! own and their results are discarded.

use crate::controller::{DropdownController, KeyOutcome};
use crate::debounce::{Debouncer, Settled};
use crate::error::{Error, Result};
use crate::event::{Key, PointerTarget, ScrollMetrics, SearchEvent};
use crate::view::DropdownView;
use lookahead_core::{IdentityProvider, Query, SearchConfig, SearchItem};
use lookahead_fetch::{FetchOutcome, FetchTicket, ResultFetcher, SearchSource};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;

type SelectFn<T> = Box<dyn FnMut(T) + Send>;
type SubmitFn = Box<dyn FnMut(Query) + Send>;

/// Caller hooks for selection and submission.
///
/// Both default to no-ops. Navigation is up to the caller.
pub struct SearchCallbacks<T> {
    on_select: SelectFn<T>,
    on_submit: SubmitFn,
}

impl<T> SearchCallbacks<T> {
    /// No-op callbacks.
    pub fn new() -> Self {
        Self {
            on_select: Box::new(|_| {}),
            on_submit: Box::new(|_| {}),
        }
    }

    /// Run `f` with the chosen result.
    pub fn on_select(mut self, f: impl FnMut(T) + Send + 'static) -> Self {
        self.on_select = Box::new(f);
        self
    }

    /// Run `f` when the input is submitted with Enter.
    pub fn on_submit(mut self, f: impl FnMut(Query) + Send + 'static) -> Self {
        self.on_submit = Box::new(f);
        self
    }
}

impl<T> Default for SearchCallbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running search box.
pub struct SearchBox<T: SearchItem> {
    events: mpsc::UnboundedSender<SearchEvent>,
    view: watch::Receiver<DropdownView<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T: SearchItem> SearchBox<T> {
    /// Start a search box on the current tokio runtime.
    pub fn spawn<S>(
        config: &SearchConfig,
        source: S,
        identity: &dyn IdentityProvider,
        callbacks: SearchCallbacks<T>,
    ) -> Self
    where
        S: SearchSource<Item = T>,
    {
        let fetcher = Arc::new(ResultFetcher::new(source, config.page_size));
        let controller = DropdownController::new(fetcher, config.scroll_threshold_px);
        let (debouncer, settled_rx) = Debouncer::channel(config.debounce());
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(DropdownView::default());
        let (done_tx, done_rx) = mpsc::unbounded_channel();

        let driver = Driver {
            controller,
            debouncer,
            settled_rx,
            events_rx,
            done_tx,
            done_rx,
            view_tx,
            callbacks,
        };
        let span = tracing::debug_span!(
            target: "lookahead::search_box",
            "search_box",
            visitor = %identity.visitor_id()
        );
        let task = tokio::spawn(driver.run().instrument(span));

        Self {
            events: events_tx,
            view: view_rx,
            task: Some(task),
        }
    }

    /// Queue an event.
    pub fn send(&self, event: SearchEvent) -> Result<()> {
        self.events.send(event).map_err(|_| Error::Closed)
    }

    /// The text input changed.
    pub fn input(&self, raw: impl Into<String>) -> Result<()> {
        self.send(SearchEvent::Input(raw.into()))
    }

    /// The results container scrolled.
    pub fn scroll(&self, metrics: ScrollMetrics) -> Result<()> {
        self.send(SearchEvent::Scroll(metrics))
    }

    /// A pointer went down somewhere on the page.
    pub fn pointer_down(&self, target: PointerTarget) -> Result<()> {
        self.send(SearchEvent::PointerDown(target))
    }

    /// A key was pressed in the input.
    pub fn key(&self, key: Key) -> Result<()> {
        self.send(SearchEvent::Key(key))
    }

    /// The row at `index` was chosen.
    pub fn select(&self, index: usize) -> Result<()> {
        self.send(SearchEvent::Select(index))
    }

    /// Receiver for view updates.
    pub fn subscribe(&self) -> watch::Receiver<DropdownView<T>> {
        self.view.clone()
    }

    /// Latest published view.
    pub fn view(&self) -> DropdownView<T> {
        self.view.borrow().clone()
    }

    /// Wait until the published view satisfies `predicate`.
    pub async fn wait_for<F>(&self, mut predicate: F) -> Result<DropdownView<T>>
    where
        F: FnMut(&DropdownView<T>) -> bool,
    {
        let mut rx = self.view.clone();
        let view = rx
            .wait_for(|v| predicate(v))
            .await
            .map_err(|_| Error::Closed)?
            .clone();
        Ok(view)
    }

    /// Stop the event loop and wait for it to exit.
    pub async fn close(mut self) {
        let task = self.task.take();
        drop(self);
        if let Some(task) = task {
            let _ = task.await;
        }
    }
}

impl<T: SearchItem> Drop for SearchBox<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct Driver<S: SearchSource> {
    controller: DropdownController<S>,
    debouncer: Debouncer<Query>,
    settled_rx: mpsc::UnboundedReceiver<Settled<Query>>,
    events_rx: mpsc::UnboundedReceiver<SearchEvent>,
    done_tx: mpsc::UnboundedSender<FetchOutcome<S::Item>>,
    done_rx: mpsc::UnboundedReceiver<FetchOutcome<S::Item>>,
    view_tx: watch::Sender<DropdownView<S::Item>>,
    callbacks: SearchCallbacks<S::Item>,
}

impl<S: SearchSource> Driver<S> {
    async fn run(mut self) {
        loop {
            tokio::select! {
                event = self.events_rx.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                Some(settled) = self.settled_rx.recv() => {
                    if let Some(query) = self.debouncer.accept(settled) {
                        let ticket = self.controller.on_settled(query);
                        self.spawn_fetch(ticket);
                    }
                }
                Some(outcome) = self.done_rx.recv() => {
                    self.controller.on_fetch_complete(outcome);
                }
            }
            self.view_tx.send_replace(self.controller.view());
        }
        tracing::debug!(target: "lookahead::search_box", "Search box closed");
    }

    fn handle(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Input(raw) => {
                let query = self.controller.on_input(&raw);
                self.debouncer.push(query);
            }
            SearchEvent::Scroll(metrics) => {
                let ticket = self.controller.on_scroll(metrics);
                self.spawn_fetch(ticket);
            }
            SearchEvent::PointerDown(target) => {
                if self.controller.on_pointer_down(target) {
                    self.debouncer.cancel();
                }
            }
            SearchEvent::Key(key) => match self.controller.on_key(key) {
                KeyOutcome::Submit(query) => (self.callbacks.on_submit)(query),
                KeyOutcome::Dismissed => self.debouncer.cancel(),
                KeyOutcome::Ignored => {}
            },
            SearchEvent::Select(index) => {
                if let Some(item) = self.controller.select(index) {
                    self.debouncer.cancel();
                    (self.callbacks.on_select)(item);
                }
            }
        }
    }

    fn spawn_fetch(&self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let fetcher = self.controller.fetcher();
        let done = self.done_tx.clone();
        tokio::task::spawn_blocking(move || {
            let outcome = fetcher.fetch(&ticket);
            let _ = done.send(outcome);
        });
    }
}
