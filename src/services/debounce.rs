//! Cancellable debounce timer.
//!
//! Two layers: [`Debouncer`] is the pure deadline-based core that view state
//! drives with explicit instants (so tests advance a virtual clock instead of
//! sleeping), and [`debounced_channel`] is the tokio-backed live driver for
//! event-loop use.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default quiescence window for search input.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Deadline-based debouncer. Holds at most one pending value; each
/// [`submit`](Debouncer::submit) discards the previous pending commit and
/// restarts the window.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value` to fire after one quiet window from `now`, replacing
    /// any pending value.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// Discard the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The instant the pending value will fire, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending value if its deadline has passed. Fires at most once
    /// per submitted value.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

/// Sending half of a live debounced channel. Each [`send`](DebouncedSender::send)
/// aborts the previously scheduled commit and starts a fresh window.
pub struct DebouncedSender<T> {
    window: Duration,
    out: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

/// Create a live debounced channel: values sent into the
/// [`DebouncedSender`] arrive on the receiver only after `window` of
/// quiescence, at most one per quiet period.
///
/// Must be called within a tokio runtime.
pub fn debounced_channel<T: Send + 'static>(
    window: Duration,
) -> (DebouncedSender<T>, mpsc::UnboundedReceiver<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        DebouncedSender {
            window,
            out: tx,
            pending: None,
        },
        rx,
    )
}

impl<T: Send + 'static> DebouncedSender<T> {
    pub fn send(&mut self, value: T) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
        let out = self.out.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Receiver may be gone during teardown; nothing to do then.
            let _ = out.send(value);
        }));
    }

    /// Abort the pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl<T> Drop for DebouncedSender<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
