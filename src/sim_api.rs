// Simulation API module - input/output records and the engine error type
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

// Error type for simulation operations
#[derive(Debug)]
pub struct SimulationError {
    message: String,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SimulationError {}

impl From<String> for SimulationError {
    fn from(msg: String) -> Self {
        SimulationError { message: msg }
    }
}

impl From<&str> for SimulationError {
    fn from(msg: &str) -> Self {
        SimulationError { message: msg.to_string() }
    }
}

/// Launch parameters for a horizontally fired projectile.
///
/// Serialized field names follow the camelCase wire shape
/// (`initialVelocity`, `dragCoefficient`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    /// Initial horizontal velocity (m/s); negative fires in the -x direction
    pub initial_velocity: f64,
    /// Launch height above the ground (m)
    pub initial_height: f64,
    /// Projectile mass (kg), must be positive
    pub mass: f64,
    /// Dimensionless drag coefficient
    pub drag_coefficient: f64,
    /// Frontal area (m²)
    pub area: f64,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            initial_velocity: 20.0,
            initial_height: 100.0,
            mass: 1.0,
            drag_coefficient: 0.47, // sphere
            area: 0.01,
        }
    }
}

impl SimulationInput {
    /// Check the inputs before integration.
    ///
    /// Rejects non-finite fields and non-positive mass (used as a divisor);
    /// anything else is the caller's responsibility. Negative drag
    /// coefficients or areas are accepted and simply produce thrust
    /// instead of drag.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initialVelocity", self.initial_velocity),
            ("initialHeight", self.initial_height),
            ("mass", self.mass),
            ("dragCoefficient", self.drag_coefficient),
            ("area", self.area),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(format!("invalid input: {} must be finite, got {}", name, value).into());
            }
        }
        if self.mass <= 0.0 {
            return Err(format!("invalid input: mass must be positive, got {}", self.mass).into());
        }
        Ok(())
    }
}

/// One trajectory sample: position at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsState {
    /// Elapsed time since launch (s)
    pub time: f64,
    /// Horizontal position (m)
    pub position_x: f64,
    /// Height above the ground (m), clamped to zero in stored samples
    pub position_y: f64,
}

/// Full simulation result: the sampled trajectory plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutput {
    /// Samples ordered by strictly increasing time, starting at t = 0
    pub trajectory: Vec<PhysicsState>,
    /// Time of the last sample (s)
    pub total_time: f64,
    /// Horizontal position of the last sample (m)
    pub max_distance: f64,
}
