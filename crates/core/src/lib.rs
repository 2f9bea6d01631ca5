//! Core types for the Slide friction simulator.
//!
//! This crate defines the values and abstractions the integrator, observers,
//! and command-line front end build on:
//!
//! - [`Parameters`]: the immutable configuration of a single run
//! - [`Motion`] and [`StepIntegrable`]: the integrator state and its stepping rule
//! - [`Sample`], [`Summary`], [`Trajectory`]: the recorded history of a run
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`physics`]: friction force and analytic reference values
//! - [`constraint`] and [`validate`]: checks that turn raw input into [`Parameters`]

pub mod constraint;
pub mod physics;
pub mod validate;

mod motion;
mod observer;
mod params;
mod trajectory;

pub use motion::{Motion, StepIntegrable};
pub use observer::Observer;
pub use params::{
    DEFAULT_MASS, DEFAULT_MAX_TIME, DEFAULT_TIME_STEP, GRAVITY_TOLERANCE, Parameters,
    STANDARD_GRAVITY, STOP_THRESHOLD,
};
pub use trajectory::{Sample, Summary, Trajectory};
