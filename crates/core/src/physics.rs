//! Coulomb friction on a horizontal surface.
//!
//! The normal force is `m * g`, so kinetic friction has magnitude `μ * m * g`
//! and always opposes the current direction of motion.

use crate::Parameters;

/// Returns `-1.0`, `0.0`, or `1.0` according to the sign of `value`.
///
/// Unlike [`f64::signum`], zero (of either sign) and NaN map to `0.0`, so a
/// body at rest feels no friction.
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Friction force acting on a body moving at `velocity`, in N.
#[must_use]
pub fn friction_force(velocity: f64, params: &Parameters) -> f64 {
    -sign(velocity) * params.friction_coefficient * params.mass * params.gravity
}

/// Magnitude of the friction deceleration `μ * g`, in m/s².
#[must_use]
pub fn deceleration(params: &Parameters) -> f64 {
    params.friction_coefficient * params.gravity
}

/// Time for friction to bring the body to rest, from `|v0| / (μ g)`.
///
/// Returns `None` if friction does not decelerate the body.
#[must_use]
pub fn stopping_time(params: &Parameters) -> Option<f64> {
    let decel = effective_deceleration(params)?;
    Some(params.initial_velocity.abs() / decel)
}

/// Signed distance travelled before coming to rest, from `v0² / (2 μ g)`.
///
/// Returns `None` if friction does not decelerate the body.
#[must_use]
pub fn stopping_distance(params: &Parameters) -> Option<f64> {
    let decel = effective_deceleration(params)?;
    let v0 = params.initial_velocity;
    Some(v0 * v0.abs() / (2.0 * decel))
}

fn effective_deceleration(params: &Parameters) -> Option<f64> {
    let decel = deceleration(params);
    (decel.is_finite() && decel > 0.0).then_some(decel)
}
