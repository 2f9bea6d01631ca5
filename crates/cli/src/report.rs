use std::fmt;

use slide_core::{
    Parameters,
    physics::{stopping_distance, stopping_time},
};
use slide_solvers::transient::friction::{Solution, Status};

/// Echoes the validated inputs, e.g. `Using μ=0.3, v0=10, g=9.81`.
pub struct Inputs<'a>(pub &'a Parameters);

impl fmt::Display for Inputs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(
            f,
            "Using μ={}, v0={}, g={}",
            p.friction_coefficient, p.initial_velocity, p.gravity
        )
    }
}

/// The end-of-run summary printed to standard output.
pub struct Report<'a> {
    params: &'a Parameters,
    solution: &'a Solution,
    velocity_precision: usize,
}

impl<'a> Report<'a> {
    pub fn new(params: &'a Parameters, solution: &'a Solution, velocity_precision: u8) -> Self {
        Self {
            params,
            solution,
            velocity_precision: usize::from(velocity_precision),
        }
    }
}

fn reason(status: Status) -> &'static str {
    match status {
        Status::AtRest => "the object came to rest",
        Status::BelowThreshold => "velocity fell below the stop threshold",
        Status::TimeLimit => "the time limit was reached",
        Status::StoppedByObserver => "stopped early",
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.solution.trajectory.summary();

        writeln!(f, "Simulation complete.")?;
        writeln!(f, "Final position: {:.2} m", summary.final_position)?;
        writeln!(
            f,
            "Final velocity: {:.prec$} m/s",
            summary.final_velocity,
            prec = self.velocity_precision
        )?;
        writeln!(f, "Total time simulated: {:.2} s", summary.total_time)?;
        write!(
            f,
            "Stopped because {} after {} steps.",
            reason(self.solution.status),
            self.solution.steps
        )?;

        if let (Some(t), Some(d)) = (stopping_time(self.params), stopping_distance(self.params)) {
            write!(f, "\nAnalytic stop: {t:.2} s at {d:.2} m")?;
        }

        Ok(())
    }
}
