//! Fixed-step trajectory integration.
//!
//! Semi-implicit Euler scheme: each step updates velocity from the net
//! force first, then advances position with the already-updated velocity.
//! The ordering matters for numerical fidelity and must not be swapped
//! for pure explicit Euler.

use nalgebra::Vector2;

use crate::constants::{DEFAULT_TIME_STEP, GRAVITY_MPS2, MAX_STEPS, STANDARD_AIR_DENSITY};
use crate::drag::quadratic_drag_force;
use crate::sim_api::{PhysicsState, SimulationError, SimulationInput, SimulationOutput};

/// Fixed-step integrator for a point mass in a vertical plane.
///
/// Holds the physical environment and stepping policy; the defaults are
/// the named constants in [`crate::constants`]. Setters exist so tests
/// can substitute values (e.g. zero gravity exercises the step cap).
#[derive(Debug, Clone)]
pub struct TrajectoryIntegrator {
    gravity: f64,
    air_density: f64,
    time_step: f64,
    max_steps: usize,
}

impl Default for TrajectoryIntegrator {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_MPS2,
            air_density: STANDARD_AIR_DENSITY,
            time_step: DEFAULT_TIME_STEP,
            max_steps: MAX_STEPS,
        }
    }
}

impl TrajectoryIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    pub fn set_air_density(&mut self, air_density: f64) {
        self.air_density = air_density;
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.time_step = time_step;
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps;
    }

    /// Integrate the trajectory until the projectile reaches the ground
    /// or the step cap is hit, whichever comes first.
    ///
    /// The returned sequence always starts with the launch sample at
    /// t = 0 and is strictly increasing in time. Inputs are checked up
    /// front; the loop itself is pure arithmetic and cannot fail.
    pub fn solve(&self, input: &SimulationInput) -> Result<SimulationOutput, SimulationError> {
        input.validate()?;

        // Initial conditions: launched horizontally from (0, height)
        let mut position = Vector2::new(0.0, input.initial_height);
        let mut velocity = Vector2::new(input.initial_velocity, 0.0);
        let mut time = 0.0;

        let mut trajectory = Vec::new();
        trajectory.push(ground_clamped(time, position));

        // Main integration loop
        let mut steps = 0;
        while steps < self.max_steps && position.y > 0.0 {
            // Drag from the current velocity, gravity on the vertical axis
            let drag = quadratic_drag_force(
                velocity,
                self.air_density,
                input.drag_coefficient,
                input.area,
            );
            let net_force = drag + Vector2::new(0.0, -input.mass * self.gravity);
            let acceleration = net_force / input.mass;

            // Velocity first, then position from the new velocity
            velocity += acceleration * self.time_step;
            position += velocity * self.time_step;
            time += self.time_step;

            // The stored sample is clamped; the running state is not, so
            // the loop condition still sees the sign of the true height
            trajectory.push(ground_clamped(time, position));
            steps += 1;
        }

        Ok(SimulationOutput {
            total_time: time,
            max_distance: position.x,
            trajectory,
        })
    }
}

/// Run a simulation with the default environment.
///
/// This is the engine's single public operation: a pure, stateless
/// function of its input. Safe to call concurrently from any number of
/// threads.
pub fn simulate(input: &SimulationInput) -> Result<SimulationOutput, SimulationError> {
    TrajectoryIntegrator::new().solve(input)
}

fn ground_clamped(time: f64, position: Vector2<f64>) -> PhysicsState {
    PhysicsState {
        time,
        position_x: position.x,
        position_y: position.y.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(velocity: f64, height: f64, mass: f64, cd: f64, area: f64) -> SimulationInput {
        SimulationInput {
            initial_velocity: velocity,
            initial_height: height,
            mass,
            drag_coefficient: cd,
            area,
        }
    }

    #[test]
    fn test_initial_sample_is_launch_state() {
        let output = simulate(&input(20.0, 100.0, 1.0, 0.47, 0.05)).unwrap();
        let first = output.trajectory[0];
        assert_eq!(first.time, 0.0);
        assert_eq!(first.position_x, 0.0);
        assert_eq!(first.position_y, 100.0);
    }

    #[test]
    fn test_zero_height_returns_single_sample() {
        let output = simulate(&input(20.0, 0.0, 1.0, 0.47, 0.05)).unwrap();
        assert_eq!(output.trajectory.len(), 1);
        assert_eq!(output.total_time, 0.0);
        assert_eq!(output.max_distance, 0.0);
    }

    #[test]
    fn test_negative_height_returns_single_clamped_sample() {
        let output = simulate(&input(20.0, -5.0, 1.0, 0.47, 0.05)).unwrap();
        assert_eq!(output.trajectory.len(), 1);
        assert_eq!(output.trajectory[0].position_y, 0.0);
        assert_eq!(output.total_time, 0.0);
        assert_eq!(output.max_distance, 0.0);
    }

    #[test]
    fn test_final_sample_is_clamped_to_ground() {
        let output = simulate(&input(20.0, 100.0, 1.0, 0.0, 0.0)).unwrap();
        let last = output.trajectory.last().unwrap();
        assert_eq!(last.position_y, 0.0);
        // Totals mirror the last sample
        assert_eq!(output.total_time, last.time);
        assert_eq!(output.max_distance, last.position_x);
    }

    #[test]
    fn test_negative_velocity_travels_backwards() {
        let output = simulate(&input(-15.0, 50.0, 1.0, 0.47, 0.02)).unwrap();
        assert!(output.max_distance < 0.0);
        assert!(output.trajectory.iter().skip(1).all(|s| s.position_x < 0.0));
    }

    #[test]
    fn test_zero_gravity_hits_step_cap() {
        let mut integrator = TrajectoryIntegrator::new();
        integrator.set_gravity(0.0);
        let output = integrator.solve(&input(20.0, 100.0, 1.0, 0.0, 0.0)).unwrap();
        // Height never decreases, so the runaway guard terminates the loop
        assert_eq!(output.trajectory.len(), MAX_STEPS + 1);
        assert!((output.total_time - MAX_STEPS as f64 * DEFAULT_TIME_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_shorter_time_step_refines_flight_time() {
        let ballistic = input(20.0, 100.0, 1.0, 0.0, 0.0);
        let exact = (2.0 * 100.0 / GRAVITY_MPS2).sqrt();

        let mut fine = TrajectoryIntegrator::new();
        fine.set_time_step(0.001);
        fine.set_max_steps(100_000);
        let coarse_err = (simulate(&ballistic).unwrap().total_time - exact).abs();
        let fine_err = (fine.solve(&ballistic).unwrap().total_time - exact).abs();
        assert!(fine_err < coarse_err);
    }

    #[test]
    fn test_invalid_inputs_fail_before_integration() {
        assert!(simulate(&input(20.0, 100.0, 0.0, 0.47, 0.05)).is_err());
        assert!(simulate(&input(20.0, 100.0, -2.0, 0.47, 0.05)).is_err());
        assert!(simulate(&input(f64::NAN, 100.0, 1.0, 0.47, 0.05)).is_err());
        assert!(simulate(&input(20.0, f64::INFINITY, 1.0, 0.47, 0.05)).is_err());
    }
}
