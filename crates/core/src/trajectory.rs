/// One instant in the simulated history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Time in s.
    pub time: f64,

    /// Position in m.
    pub position: f64,

    /// Velocity in m/s.
    pub velocity: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(time: f64, position: f64, velocity: f64) -> Self {
        Self {
            time,
            position,
            velocity,
        }
    }
}

/// Final state of a run.
///
/// Matches the last sample, except that a run halted by the overshoot guard
/// reports a final velocity of exactly zero. A run whose loop never executes
/// reports its initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Final position in m.
    pub final_position: f64,

    /// Final velocity in m/s.
    pub final_velocity: f64,

    /// Total simulated time in s.
    pub total_time: f64,
}

/// The time-ordered samples of a run plus its [`Summary`].
///
/// Samples are appended by the integrator in strictly increasing time order.
/// The initial state is not recorded as a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
    summary: Summary,
}

impl Trajectory {
    /// Creates a trajectory from recorded samples and the final state.
    #[must_use]
    pub fn new(samples: Vec<Sample>, summary: Summary) -> Self {
        Self { samples, summary }
    }

    /// All recorded samples, in time order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The final state of the run.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Sample times, parallel to [`positions`](Self::positions) and
    /// [`velocities`](Self::velocities).
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Sample positions.
    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Sample velocities.
    #[must_use]
    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    /// The most recent sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the trajectory and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
