use slide_core::Sample;

/// Event emitted by the friction integrator for each accepted sample.
///
/// Steps are numbered from 1. The initial state is not emitted because it is
/// not part of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (1..N).
    pub step: usize,

    /// The sample recorded at this step.
    pub sample: Sample,
}
