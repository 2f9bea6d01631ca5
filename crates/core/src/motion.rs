/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the integrator advance a state by a step of
/// size `delta` without knowing how the state is laid out.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Position and velocity of the sliding object.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    /// Position in m.
    pub position: f64,

    /// Velocity in m/s.
    pub velocity: f64,
}

impl Motion {
    /// Creates a new motion state.
    #[must_use]
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }
}

/// Semi-implicit (symplectic) Euler step driven by acceleration.
///
/// ```text
/// v_{n+1} = v_n + a * dt
/// x_{n+1} = x_n + v_{n+1} * dt
/// ```
///
/// Position is advanced with the updated velocity.
impl StepIntegrable<f64> for Motion {
    type Derivative = f64;

    fn step(&self, acceleration: f64, dt: f64) -> Self {
        let velocity = self.velocity + acceleration * dt;
        Self {
            position: self.position + velocity * dt,
            velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_acceleration_drifts_at_constant_velocity() {
        let next = Motion::new(1.0, 2.0).step(0.0, 0.5);
        assert_eq!(next, Motion::new(2.0, 2.0));
    }

    #[test]
    fn position_uses_updated_velocity() {
        // Explicit Euler would give x = 0 + 10 * 0.1 = 1.0.
        let next = Motion::new(0.0, 10.0).step(-5.0, 0.1);
        assert_relative_eq!(next.velocity, 9.5);
        assert_relative_eq!(next.position, 0.95, epsilon = 1e-12);
    }
}
