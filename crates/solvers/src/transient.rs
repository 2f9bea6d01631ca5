//! Time-stepped integrators.

pub mod friction;
