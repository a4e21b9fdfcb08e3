//! Quadratic drag force decomposition.

use nalgebra::Vector2;

/// Aerodynamic drag force on the projectile, in newtons.
///
/// Standard quadratic drag law decomposed per axis with the scalar speed
/// as the common multiplier:
///
/// `F_i = -0.5 * rho * |v| * v_i * Cd * A`
///
/// so the force opposes the velocity direction with magnitude
/// `0.5 * rho * |v|^2 * Cd * A`. This is not a per-axis drag law; both
/// components share the same `|v|` factor.
pub fn quadratic_drag_force(
    velocity: Vector2<f64>,
    air_density: f64,
    drag_coefficient: f64,
    area: f64,
) -> Vector2<f64> {
    let speed = velocity.norm();
    velocity * (-0.5 * air_density * drag_coefficient * area * speed)
}
