use slide_core::Observer;
use tracing::Level;

use crate::traits::HasSample;

/// An observer that logs samples as `tracing` events.
///
/// Logs the first step and then every `every`-th step at the configured
/// level. It never requests an action, so it can be attached to any run
/// without changing the result.
///
/// # Example
///
/// ```ignore
/// let observer = TraceObserver::new(Level::DEBUG).every(50);
/// friction::solve(&params, observer);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    level: Level,
    every: usize,
}

impl TraceObserver {
    /// Creates an observer that logs every step at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, every: 1 }
    }

    /// Logs only every `n`-th step. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    fn is_due(&self, step: usize) -> bool {
        step == 1 || step % self.every == 0
    }
}

impl<E: HasSample, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if !self.is_due(step) {
            return None;
        }

        let s = event.sample();
        match self.level {
            Level::ERROR => {
                tracing::event!(Level::ERROR, step, t = s.time, x = s.position, v = s.velocity, "sample");
            }
            Level::WARN => {
                tracing::event!(Level::WARN, step, t = s.time, x = s.position, v = s.velocity, "sample");
            }
            Level::INFO => {
                tracing::event!(Level::INFO, step, t = s.time, x = s.position, v = s.velocity, "sample");
            }
            Level::DEBUG => {
                tracing::event!(Level::DEBUG, step, t = s.time, x = s.position, v = s.velocity, "sample");
            }
            _ => {
                tracing::event!(Level::TRACE, step, t = s.time, x = s.position, v = s.velocity, "sample");
            }
        }
        None
    }
}
