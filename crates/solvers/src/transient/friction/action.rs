/// Control actions supported by the friction integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integrator early and return the trajectory so far.
    StopEarly,
}
