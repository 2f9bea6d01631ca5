#![allow(clippy::cast_precision_loss)]

//! Property tests for the friction integrator.

use proptest::prelude::*;
use slide_core::{Parameters, STANDARD_GRAVITY, physics};
use slide_solvers::transient::friction::{self, Status};

proptest! {
    #[test]
    fn always_terminates_within_step_limit(
        v0 in -1000.0f64..1000.0,
        mu in 0.0f64..=1.0,
    ) {
        let params = Parameters::new(v0, mu, STANDARD_GRAVITY);
        let solution = friction::solve_unobserved(&params);

        prop_assert!(solution.steps <= params.max_steps());
        prop_assert_eq!(solution.trajectory.len(), solution.steps);
    }

    #[test]
    fn speed_never_increases(
        v0 in -100.0f64..100.0,
        mu in 0.01f64..=1.0,
    ) {
        let trajectory = friction::simulate(v0, mu, STANDARD_GRAVITY);
        let mut previous = v0.abs();

        for sample in trajectory.samples() {
            prop_assert!(
                sample.velocity.abs() <= previous,
                "speed grew from {} to {} at t={}",
                previous, sample.velocity.abs(), sample.time
            );
            previous = sample.velocity.abs();
        }
        prop_assert!(trajectory.summary().final_velocity.abs() <= previous);
    }

    #[test]
    fn direction_never_reverses(
        v0 in -100.0f64..100.0,
        mu in 0.0f64..=1.0,
    ) {
        let trajectory = friction::simulate(v0, mu, STANDARD_GRAVITY);
        let direction = physics::sign(v0);

        for sample in trajectory.samples() {
            prop_assert_eq!(physics::sign(sample.velocity), direction);
        }
    }

    #[test]
    fn termination_reason_matches_final_state(
        v0 in -100.0f64..100.0,
        mu in 0.0f64..=1.0,
    ) {
        let params = Parameters::new(v0, mu, STANDARD_GRAVITY);
        let solution = friction::solve_unobserved(&params);
        let summary = solution.trajectory.summary();

        match solution.status {
            Status::AtRest => prop_assert_eq!(summary.final_velocity, 0.0),
            Status::BelowThreshold => {
                prop_assert!(summary.final_velocity.abs() <= params.stop_threshold);
            }
            Status::TimeLimit => {
                prop_assert!(summary.final_velocity.abs() > params.stop_threshold);
                prop_assert_eq!(solution.steps, params.max_steps());
                prop_assert!((summary.total_time - params.max_time).abs() < 1e-9);
            }
            Status::StoppedByObserver => prop_assert!(false, "no observer was attached"),
        }
    }

    #[test]
    fn stops_close_to_analytic_solution(
        v0 in 0.1f64..40.0,
        mu in 0.05f64..=1.0,
    ) {
        let params = Parameters::new(v0, mu, STANDARD_GRAVITY);
        let stop_time = physics::stopping_time(&params).unwrap();
        prop_assume!(stop_time < params.max_time - params.time_step);

        let solution = friction::solve_unobserved(&params);
        let summary = solution.trajectory.summary();
        let dt = params.time_step;
        let decel = physics::deceleration(&params);

        prop_assert!(solution.status.is_rest());
        prop_assert!((summary.total_time - stop_time).abs() <= 2.0 * dt);

        let distance = physics::stopping_distance(&params).unwrap();
        prop_assert!(
            (summary.final_position - distance).abs() <= v0 * dt + decel * dt * dt,
            "x={} expected≈{}",
            summary.final_position, distance
        );
    }

    #[test]
    fn identical_inputs_give_identical_trajectories(
        v0 in -100.0f64..100.0,
        mu in 0.0f64..=1.0,
    ) {
        let first = friction::simulate(v0, mu, STANDARD_GRAVITY);
        let second = friction::simulate(v0, mu, STANDARD_GRAVITY);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.samples().iter().zip(second.samples()) {
            prop_assert_eq!(a.time.to_bits(), b.time.to_bits());
            prop_assert_eq!(a.position.to_bits(), b.position.to_bits());
            prop_assert_eq!(a.velocity.to_bits(), b.velocity.to_bits());
        }
    }
}
