//! # Projectile Engine
//!
//! Trajectory engine for a projectile launched horizontally under gravity
//! and quadratic aerodynamic drag. The single entry point is
//! [`simulate`], a pure function from a [`SimulationInput`] record to a
//! [`SimulationOutput`] record; [`TrajectoryIntegrator`] exposes the same
//! computation with a configurable environment.

// Re-export the main types and functions
pub use integrator::{simulate, TrajectoryIntegrator};
pub use sim_api::{PhysicsState, SimulationError, SimulationInput, SimulationOutput};

// Module declarations
pub mod constants;
mod drag;
mod integrator;
mod sim_api;
