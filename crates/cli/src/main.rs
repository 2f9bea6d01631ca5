//! `slide`: simulate a block sliding to rest under Coulomb friction.
//!
//! Reads the initial velocity, friction coefficient, and gravity from flags,
//! a TOML parameter file, or interactive prompts, runs the fixed-step
//! integrator, prints a summary, and plots position and velocity.

#[cfg(feature = "plot")]
mod chart;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod report;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use slide_observers::TraceObserver;
use slide_solvers::transient::friction;
use tracing::{Level, error, info};

use crate::{
    cli::Cli,
    config::ParameterFile,
    error::Error,
    input::Prompter,
    report::{Inputs, Report},
};

/// Samples logged by the trace observer at debug level.
const TRACE_EVERY: usize = 50;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let file = match &cli.config {
        Some(path) => ParameterFile::load(path)?,
        None => ParameterFile::default(),
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let params = input::resolve(cli, &file, &mut prompter)?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", Inputs(&params))?;

    let solution = friction::solve(&params, TraceObserver::new(Level::DEBUG).every(TRACE_EVERY));

    writeln!(out, "{}", Report::new(&params, &solution, cli.velocity_precision))?;
    out.flush()?;
    drop(out);

    if cli.no_plot {
        return Ok(());
    }
    plot(&params, &solution)
}

#[cfg(feature = "plot")]
fn plot(params: &slide_core::Parameters, solution: &friction::Solution) -> Result<(), Error> {
    info!("opening chart window");
    chart::show(params, &solution.trajectory)?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot(_params: &slide_core::Parameters, _solution: &friction::Solution) -> Result<(), Error> {
    info!("built without the `plot` feature, skipping charts");
    Ok(())
}
