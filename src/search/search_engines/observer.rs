//! Hooks called by the engines once per expansion, used to watch a search as
//! it runs.

use crate::search::search_engines::CancellationToken;
use std::{
    fmt::{Debug, Formatter},
    thread,
    time::{Duration, Instant},
};

pub trait SearchObserver<S> {
    /// Called right after `state` was added to the trace. `step` counts
    /// expansions from 1.
    fn on_expand(&mut self, state: &S, step: usize);
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<S> SearchObserver<S> for NoObserver {
    fn on_expand(&mut self, _state: &S, _step: usize) {}
}

const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// Calls `callback` for every expansion and then waits `delay` before the
/// search may continue. The wait is cut short once `cancellation` is
/// triggered, so a cancelled animation stops within one slice.
pub struct PacedObserver<F> {
    delay: Duration,
    cancellation: CancellationToken,
    callback: F,
}

impl<F> PacedObserver<F> {
    pub fn new(delay: Duration, cancellation: CancellationToken, callback: F) -> Self {
        Self {
            delay,
            cancellation,
            callback,
        }
    }

    fn pause(&self) {
        let deadline = Instant::now() + self.delay;
        while !self.cancellation.is_cancelled() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(SLEEP_SLICE.min(deadline - now));
        }
    }
}

impl<S, F: FnMut(&S, usize)> SearchObserver<S> for PacedObserver<F> {
    fn on_expand(&mut self, state: &S, step: usize) {
        (self.callback)(state, step);
        self.pause();
    }
}

impl<F> Debug for PacedObserver<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacedObserver")
            .field("delay", &self.delay)
            .field("cancellation", &self.cancellation)
            .finish_non_exhaustive()
    }
}
