//! Capability traits for observers.
//!
//! These traits abstract over solver-specific event types so observers can
//! be written once and reused.
//!
//! # Example
//!
//! ```rust
//! use slide_core::Observer;
//! use slide_observers::traits::HasSample;
//!
//! struct Distance {
//!     furthest: f64,
//! }
//!
//! impl<E: HasSample, A> Observer<E, A> for Distance {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.furthest = self.furthest.max(event.sample().position.abs());
//!         None
//!     }
//! }
//! ```

use slide_core::Sample;
use slide_solvers::transient::friction;

/// An event that carries a trajectory sample.
pub trait HasSample {
    /// The step number that produced the sample.
    fn step(&self) -> usize;

    /// The sample recorded for this event.
    fn sample(&self) -> Sample;
}

impl HasSample for friction::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn sample(&self) -> Sample {
        self.sample
    }
}
