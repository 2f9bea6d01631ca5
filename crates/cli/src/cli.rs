use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line arguments.
///
/// Each simulation input can come from a flag, its environment variable, or
/// the parameter file. Anything still missing is prompted for.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "slide",
    version,
    about = "Simulate a block sliding to rest under Coulomb friction",
    long_about = "Simulates a 1 kg block decelerating under Coulomb friction from an \
                  initial velocity until it stops or 5 s elapse, then prints a summary \
                  and plots position and velocity against time."
)]
pub struct Cli {
    /// Initial velocity in m/s (must be greater than zero)
    #[arg(long, env = "SLIDE_V0", allow_hyphen_values = true)]
    pub v0: Option<String>,

    /// Coefficient of friction (between 0 and 1)
    #[arg(long, env = "SLIDE_MU", allow_hyphen_values = true)]
    pub mu: Option<String>,

    /// Acceleration due to gravity in m/s² (must be 9.81)
    #[arg(long, env = "SLIDE_G", allow_hyphen_values = true)]
    pub g: Option<String>,

    /// TOML file providing `initial_velocity`, `friction_coefficient`, and `gravity`
    #[arg(long, short = 'c', env = "SLIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the summary without opening the chart window
    #[arg(long)]
    pub no_plot: bool,

    /// Decimal places used for the final velocity
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=5))]
    pub velocity_precision: u8,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
