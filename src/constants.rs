//! Physical and numerical constants used by the trajectory engine.

/// Gravitational acceleration in m/s²
pub const GRAVITY_MPS2: f64 = 9.81;

/// Standard air density at sea level (kg/m³)
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Default integration time step in seconds
///
/// At 0.01 s a typical drop from 100 m produces a few hundred samples,
/// enough resolution for smooth trajectory playback without ballooning
/// the output sequence.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Hard cap on the number of integration steps
///
/// Runaway-loop guard for inputs whose height never reaches the ground
/// (zero gravity, malformed parameters). Hitting the cap is not an error;
/// the partial trajectory up to that point is returned as-is.
pub const MAX_STEPS: usize = 10_000;
