//! Integrators for the Slide friction simulator.
//!
//! - [`transient::friction`]: fixed-step semi-implicit Euler with a
//!   direction-reversal guard for a body sliding under Coulomb friction

pub mod transient;
