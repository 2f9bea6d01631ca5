use slide_core::{Parameters, Trajectory};
use slide_observers::{Chart, PlotObserver, ShowConfig, show_charts};

/// Builds the position and velocity charts for a finished run.
pub fn charts(trajectory: &Trajectory) -> Vec<Chart> {
    let mut position = PlotObserver::<1>::new(["Position"]);
    let mut velocity = PlotObserver::<1>::new(["Velocity"]);

    for sample in trajectory.samples() {
        position.record(sample.time, [Some(sample.position)]);
        velocity.record(sample.time, [Some(sample.velocity)]);
    }

    vec![
        position.into_chart(
            ShowConfig::new()
                .title("Position vs. Time")
                .x_label("Time (s)")
                .y_label("Position (m)"),
        ),
        velocity.into_chart(
            ShowConfig::new()
                .title("Velocity vs. Time")
                .x_label("Time (s)")
                .y_label("Velocity (m/s)"),
        ),
    ]
}

/// Opens the chart window and blocks until it is closed.
pub fn show(params: &Parameters, trajectory: &Trajectory) -> Result<(), eframe::Error> {
    let title = format!(
        "Slide: v0 = {} m/s, μ = {}",
        params.initial_velocity, params.friction_coefficient
    );
    show_charts(&title, charts(trajectory))
}

#[cfg(test)]
mod tests {
    use super::*;

    use slide_solvers::transient::friction;

    #[test]
    fn one_point_per_sample_in_each_chart() {
        let trajectory = friction::simulate(10.0, 0.3, 9.81);
        let charts = charts(&trajectory);

        assert_eq!(charts.len(), 2);
        let position = &charts[0].traces()[0];
        let velocity = &charts[1].traces()[0];

        assert_eq!(position.0, "Position");
        assert_eq!(velocity.0, "Velocity");
        assert_eq!(position.1.len(), trajectory.len());
        assert_eq!(velocity.1.len(), trajectory.len());

        let last = trajectory.last().expect("has samples");
        assert_eq!(position.1.last(), Some(&[last.time, last.position]));
        assert_eq!(velocity.1.last(), Some(&[last.time, last.velocity]));
    }

    #[test]
    fn empty_trajectory_gives_empty_charts() {
        let trajectory = friction::simulate(0.0, 0.3, 9.81);
        assert!(charts(&trajectory).iter().all(|c| c.traces()[0].1.is_empty()));
    }
}
