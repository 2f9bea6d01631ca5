use slide_core::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A step would have reversed the direction of motion, so the velocity
    /// was snapped to exactly zero.
    AtRest,

    /// The speed was at or below the stopping threshold when checked,
    /// including runs that start below it.
    BelowThreshold,

    /// The time limit was reached while the body was still moving.
    TimeLimit,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

impl Status {
    /// Whether the body came to rest, as opposed to the run being cut short.
    #[must_use]
    pub fn is_rest(self) -> bool {
        matches!(self, Status::AtRest | Status::BelowThreshold)
    }
}

/// The result of a friction integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Recorded samples and final state.
    pub trajectory: Trajectory,

    /// Number of accepted integration steps.
    pub steps: usize,
}
