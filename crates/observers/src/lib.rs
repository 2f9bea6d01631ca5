//! Reusable observers for the Slide friction simulator.
//!
//! This crate provides [`Observer`] implementations that can be passed to
//! [`friction::solve`].
//!
//! # Modules
//!
//! - [`traits`]: capability traits for observers ([`HasSample`])
//! - [`TraceObserver`]: logs samples through `tracing`
//!
//! # Features
//!
//! - `plot`: enables [`PlotObserver`] and [`show_charts`] for visualizing a
//!   run via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: slide_core::Observer
//! [`friction::solve`]: slide_solvers::transient::friction::solve
//! [`HasSample`]: traits::HasSample

pub mod traits;

mod trace;

#[cfg(feature = "plot")]
mod plot;

pub use trace::TraceObserver;

#[cfg(feature = "plot")]
pub use plot::{Chart, PlotObserver, Plottable, ShowConfig, show_charts};
