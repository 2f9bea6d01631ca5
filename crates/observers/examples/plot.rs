//! Compare friction coefficients side by side.
//!
//! Three coefficients are simulated from the same initial velocity and their
//! traces are overlaid, one chart for position and one for velocity. Larger
//! coefficients stop sooner.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 8
//! ```
//!
//! The optional argument is the initial velocity in m/s (default 10).

use std::error::Error;

use slide_core::{STANDARD_GRAVITY, validate};
use slide_observers::{PlotObserver, ShowConfig, show_charts};
use slide_solvers::transient::friction;

const COEFFICIENTS: [f64; 3] = [0.1, 0.3, 0.6];

fn main() -> Result<(), Box<dyn Error>> {
    let v0 = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid initial velocity, expected a number, e.g. 8");
            std::process::exit(1);
        })
        .unwrap_or(10.0);

    let names = COEFFICIENTS.map(|mu| format!("μ = {mu}"));
    let names = [names[0].as_str(), names[1].as_str(), names[2].as_str()];
    let mut position = PlotObserver::<3>::new(names);
    let mut velocity = PlotObserver::<3>::new(names);

    for (slot, mu) in COEFFICIENTS.into_iter().enumerate() {
        let params = validate::validate(v0, mu, STANDARD_GRAVITY)?;

        friction::solve(&params, |event: &friction::Event| {
            let mut x = [None; 3];
            let mut v = [None; 3];
            x[slot] = Some(event.sample.position);
            v[slot] = Some(event.sample.velocity);
            position.record(event.sample.time, x);
            velocity.record(event.sample.time, v);
            None
        });
    }

    show_charts(
        &format!("Coulomb friction, v0 = {v0} m/s"),
        vec![
            position.into_chart(
                ShowConfig::new()
                    .title("Position vs. Time")
                    .x_label("Time (s)")
                    .y_label("Position (m)")
                    .legend(),
            ),
            velocity.into_chart(
                ShowConfig::new()
                    .title("Velocity vs. Time")
                    .x_label("Time (s)")
                    .y_label("Velocity (m/s)")
                    .legend(),
            ),
        ],
    )?;

    Ok(())
}
