//! Cancellable input debouncer.
//!
//! Each [`Debouncer::push`] supersedes the pending value: the previous timer
//! task is aborted and the generation counter moves on. Emissions carry the
//! generation they were scheduled under, and [`Debouncer::accept`] drops any
//! emission that is no longer the latest, so a timer that fired just before
//! being superseded cannot leak an old value. Dropping the debouncer aborts
//! the pending timer.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A value that survived the quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<T> {
    generation: u64,
    value: T,
}

impl<T> Settled<T> {
    /// Generation this value was pushed under.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Emits the latest pushed value once no push has happened for `delay`.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    sink: mpsc::UnboundedSender<Settled<T>>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer emitting into `sink`. Must be used inside a
    /// tokio runtime unless `delay` is zero.
    pub fn new(delay: Duration, sink: mpsc::UnboundedSender<Settled<T>>) -> Self {
        Self {
            delay,
            sink,
            generation: 0,
            pending: None,
        }
    }

    /// Create a debouncer together with its receiving end.
    pub fn channel(delay: Duration) -> (Self, mpsc::UnboundedReceiver<Settled<T>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(delay, tx), rx)
    }

    /// Configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, cancelling whatever was pending.
    pub fn push(&mut self, value: T) {
        self.abort_pending();
        self.generation += 1;
        let settled = Settled {
            generation: self.generation,
            value,
        };

        if self.delay.is_zero() {
            let _ = self.sink.send(settled);
            return;
        }

        let sink = self.sink.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sink.send(settled);
        }));
    }

    /// Drop the pending value, if any. Emissions already queued are
    /// rejected by [`accept`](Self::accept).
    pub fn cancel(&mut self) {
        self.abort_pending();
        self.generation += 1;
    }

    /// True while a timer is running.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().map_or(false, |h| !h.is_finished())
    }

    /// Unwrap an emission if it is still the latest push.
    pub fn accept(&mut self, settled: Settled<T>) -> Option<T> {
        if settled.generation != self.generation {
            return None;
        }
        self.pending = None;
        Some(settled.value)
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
