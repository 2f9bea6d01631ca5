/// Mass of the sliding object in kilograms.
pub const DEFAULT_MASS: f64 = 1.0;

/// Fixed integration step in seconds.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Simulated time after which a run is truncated, in seconds.
pub const DEFAULT_MAX_TIME: f64 = 5.0;

/// Speed at or below which the object is considered to be at rest, in m/s.
pub const STOP_THRESHOLD: f64 = 1e-5;

/// The only gravitational acceleration accepted by input validation, in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Absolute tolerance used when comparing a gravity input to [`STANDARD_GRAVITY`].
pub const GRAVITY_TOLERANCE: f64 = 1e-9;

/// The complete, immutable configuration of a single simulation run.
///
/// Every value the integrator reads lives here, so a run is reproducible from
/// its `Parameters` alone. Construct with [`Parameters::new`], which fills the
/// fixed constants; the fields stay public for callers that need to inspect
/// them.
///
/// No range checks happen here. Use [`validate`](crate::validate::validate)
/// to build parameters from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Initial velocity `v0` in m/s.
    pub initial_velocity: f64,

    /// Coulomb friction coefficient `μ`.
    pub friction_coefficient: f64,

    /// Gravitational acceleration `g` in m/s².
    pub gravity: f64,

    /// Mass in kg.
    pub mass: f64,

    /// Integration step in s.
    pub time_step: f64,

    /// Time limit in s.
    pub max_time: f64,

    /// Stopping speed in m/s.
    pub stop_threshold: f64,
}

impl Parameters {
    /// Creates parameters from the three user inputs and the fixed constants.
    #[must_use]
    pub fn new(initial_velocity: f64, friction_coefficient: f64, gravity: f64) -> Self {
        Self {
            initial_velocity,
            friction_coefficient,
            gravity,
            mass: DEFAULT_MASS,
            time_step: DEFAULT_TIME_STEP,
            max_time: DEFAULT_MAX_TIME,
            stop_threshold: STOP_THRESHOLD,
        }
    }

    /// Number of steps that fit in `max_time`.
    ///
    /// The time limit is enforced on this count rather than on accumulated
    /// time, so a run that never stops produces exactly `max_time / time_step`
    /// samples. Returns zero if the ratio is not a finite positive number.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        let steps = (self.max_time / self.time_step).round();
        if steps.is_finite() && steps > 0.0 {
            // Saturating float-to-int cast.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let steps = steps as usize;
            steps
        } else {
            0
        }
    }
}
