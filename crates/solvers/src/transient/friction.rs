//! Fixed-step integrator for a body sliding under Coulomb friction.
//!
//! Each step applies semi-implicit Euler to the friction deceleration:
//!
//! ```text
//! a       = -sign(v_n) * μ * g
//! v_{n+1} = v_n + a * dt
//! x_{n+1} = x_n + v_{n+1} * dt
//! ```
//!
//! Coulomb friction can bring a body to rest but never push it backwards, so
//! a step whose velocity would change sign is rejected: the velocity is set
//! to exactly zero and the run ends without recording that step.
//!
//! # Example
//!
//! ```
//! use slide_solvers::transient::friction;
//!
//! let trajectory = friction::simulate(10.0, 0.3, 9.81);
//!
//! assert_eq!(trajectory.summary().final_velocity, 0.0);
//! assert!(trajectory.summary().total_time < 3.4);
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use slide_core::{
    Motion, Observer, Parameters, Sample, StepIntegrable, Summary, Trajectory,
    physics::{friction_force, sign},
};
use tracing::{debug, trace};

/// Simulates a run with the fixed constants and returns its trajectory.
///
/// No validation is performed. Out-of-range inputs produce a defined, if
/// physically meaningless, trajectory.
#[must_use]
pub fn simulate(v0: f64, mu: f64, g: f64) -> Trajectory {
    solve_unobserved(&Parameters::new(v0, mu, g)).trajectory
}

/// Integrates the motion of a body sliding under Coulomb friction.
///
/// # Algorithm
///
/// Starting from `x = 0`, `t = 0`, `v = v0`, repeat while
/// `|v| > stop_threshold` and fewer than [`Parameters::max_steps`] steps
/// have been taken:
///
/// 1. Compute the friction acceleration from the current velocity.
/// 2. Compute the candidate state with a semi-implicit Euler step.
/// 3. If the candidate velocity has a different sign than the current one,
///    set the velocity to zero and stop. Neither time nor position advance.
/// 4. Otherwise accept the candidate, set `t = step * dt`, record a
///    [`Sample`], and emit an [`Event`] to the observer.
///
/// Time is derived from the step count rather than accumulated, so runs that
/// hit the limit end at exactly `max_steps * dt`.
///
/// # Observer
///
/// The observer receives an [`Event`] after each accepted step and may return
/// [`Action::StopEarly`] to end the run.
#[allow(clippy::cast_precision_loss)]
pub fn solve<Obs>(params: &Parameters, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    debug!(
        v0 = params.initial_velocity,
        mu = params.friction_coefficient,
        g = params.gravity,
        dt = params.time_step,
        max_time = params.max_time,
        "starting friction integration"
    );

    let dt = params.time_step;
    let max_steps = params.max_steps();

    let mut motion = Motion::new(0.0, params.initial_velocity);
    let mut time = 0.0;
    let mut step = 0;
    let mut samples = Vec::new();

    let status = loop {
        if motion.velocity.abs() <= params.stop_threshold {
            break Status::BelowThreshold;
        }
        if step >= max_steps {
            break Status::TimeLimit;
        }

        let acceleration = friction_force(motion.velocity, params) / params.mass;
        let candidate = motion.step(acceleration, dt);

        if sign(candidate.velocity) != sign(motion.velocity) {
            trace!(step, rejected = candidate.velocity, "direction reversal, at rest");
            motion.velocity = 0.0;
            break Status::AtRest;
        }

        motion = candidate;
        step += 1;
        time = step as f64 * dt;

        let sample = Sample::new(time, motion.position, motion.velocity);
        samples.push(sample);

        if let Some(Action::StopEarly) = observer.observe(&Event { step, sample }) {
            break Status::StoppedByObserver;
        }
    };

    let summary = Summary {
        final_position: motion.position,
        final_velocity: motion.velocity,
        total_time: time,
    };

    debug!(
        ?status,
        steps = step,
        x = summary.final_position,
        v = summary.final_velocity,
        t = summary.total_time,
        "friction integration finished"
    );

    Solution {
        status,
        trajectory: Trajectory::new(samples, summary),
        steps: step,
    }
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
#[must_use]
pub fn solve_unobserved(params: &Parameters) -> Solution {
    solve(params, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn reference() -> Parameters {
        Parameters::new(10.0, 0.3, 9.81)
    }

    #[test]
    fn comes_to_rest_near_analytic_stop() {
        let solution = solve_unobserved(&reference());
        let summary = solution.trajectory.summary();

        assert_eq!(solution.status, Status::AtRest);
        assert_eq!(solution.steps, 339);
        assert_eq!(solution.trajectory.len(), 339);

        assert_eq!(summary.final_velocity, 0.0);
        assert_relative_eq!(summary.total_time, 10.0 / 2.943, epsilon = 0.02);
        assert_relative_eq!(summary.final_position, 100.0 / (2.0 * 2.943), epsilon = 0.05);
    }

    #[test]
    fn rejected_step_is_not_recorded() {
        let solution = solve_unobserved(&reference());
        let last = *solution.trajectory.last().expect("has samples");
        let summary = solution.trajectory.summary();

        assert!(last.velocity > 0.0);
        assert_eq!(summary.total_time, last.time);
        assert_eq!(summary.final_position, last.position);
    }

    #[test]
    fn frictionless_run_is_truncated() {
        let solution = solve_unobserved(&Parameters::new(5.0, 0.0, 9.81));
        let summary = solution.trajectory.summary();

        assert_eq!(solution.status, Status::TimeLimit);
        assert_eq!(solution.trajectory.len(), 500);
        assert_relative_eq!(summary.total_time, 5.0);
        assert_eq!(summary.final_velocity, 5.0);
        assert_relative_eq!(summary.final_position, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_velocity_produces_empty_trajectory() {
        let solution = solve_unobserved(&Parameters::new(0.0, 0.3, 9.81));
        let summary = solution.trajectory.summary();

        assert_eq!(solution.status, Status::BelowThreshold);
        assert_eq!(solution.steps, 0);
        assert!(solution.trajectory.is_empty());
        assert_eq!(summary.final_position, 0.0);
        assert_eq!(summary.final_velocity, 0.0);
        assert_eq!(summary.total_time, 0.0);
    }

    #[test]
    fn velocity_below_threshold_keeps_initial_state() {
        let solution = solve_unobserved(&Parameters::new(5e-6, 0.3, 9.81));

        assert_eq!(solution.status, Status::BelowThreshold);
        assert!(solution.trajectory.is_empty());
        assert_eq!(solution.trajectory.summary().final_velocity, 5e-6);
    }

    #[test]
    fn negative_velocity_mirrors_positive() {
        let forward = solve_unobserved(&reference());
        let backward = solve_unobserved(&Parameters::new(-10.0, 0.3, 9.81));

        assert_eq!(backward.status, Status::AtRest);
        assert_eq!(backward.steps, forward.steps);
        for (f, b) in forward
            .trajectory
            .samples()
            .iter()
            .zip(backward.trajectory.samples())
        {
            assert_eq!(f.time, b.time);
            assert_eq!(f.position, -b.position);
            assert_eq!(f.velocity, -b.velocity);
        }
    }

    #[test]
    fn samples_are_time_ordered() {
        let trajectory = simulate(10.0, 0.3, 9.81);
        let times = trajectory.times();

        assert!(times.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(times[0], 0.01);
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(simulate(7.5, 0.42, 9.81), simulate(7.5, 0.42, 9.81));
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(&reference(), observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 5);
        assert!(!solution.status.is_rest());
    }

    #[test]
    fn observer_sees_every_sample() {
        let mut seen = Vec::new();
        let solution = solve(&Parameters::new(1.0, 1.0, 9.81), |event: &Event| {
            seen.push((event.step, event.sample));
            None
        });

        let expected: Vec<_> = solution
            .trajectory
            .samples()
            .iter()
            .enumerate()
            .map(|(i, s)| (i + 1, *s))
            .collect();
        assert_eq!(seen, expected);
    }
}
