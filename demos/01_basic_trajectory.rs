/// Basic Trajectory Example
///
/// Simulates a sphere launched horizontally from a platform and prints
/// the flight summary plus one trajectory sample per second.

use projectile_engine::{simulate, SimulationInput};

fn main() {
    println!("=== Basic Trajectory Example ===\n");

    let input = SimulationInput {
        initial_velocity: 20.0,  // m/s
        initial_height: 100.0,   // m
        mass: 1.0,               // kg
        drag_coefficient: 0.47,  // sphere
        area: 0.05,              // m²
    };

    println!("Initial Parameters:");
    println!("  Velocity: {} m/s", input.initial_velocity);
    println!("  Height: {} m", input.initial_height);
    println!("  Mass: {} kg", input.mass);
    println!("  Drag coefficient: {}", input.drag_coefficient);
    println!("  Area: {} m²", input.area);
    println!();

    let output = simulate(&input).expect("valid inputs");

    println!("Trajectory Results:");
    println!("  Flight time: {:.2} s", output.total_time);
    println!("  Range: {:.2} m", output.max_distance);
    println!("  Samples: {}", output.trajectory.len());
    println!();

    println!("Key Trajectory Points:");
    println!("  Time (s) |   X (m)  |   Y (m)");
    println!("  ---------|----------|---------");

    // One sample per second, plus the impact sample
    for sample in output.trajectory.iter().step_by(100) {
        println!("  {:8.2} | {:8.2} | {:8.2}", sample.time, sample.position_x, sample.position_y);
    }
    let last = output.trajectory.last().expect("trajectory is never empty");
    println!("  {:8.2} | {:8.2} | {:8.2}", last.time, last.position_x, last.position_y);
}
