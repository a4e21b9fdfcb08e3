/// Drag Comparison Example
///
/// Runs the same launch with different drag coefficients to show how
/// aerodynamic shape changes range and flight time. The coefficients are
/// the classic reference values for a sphere and a cube, bracketed by a
/// drag-free ballistic run.

use projectile_engine::{simulate, SimulationInput};

fn main() {
    println!("=== Drag Comparison Example ===\n");

    let shapes = [
        ("none (ballistic)", 0.0),
        ("sphere", 0.47),
        ("cube", 1.05),
    ];

    println!("  Shape             |  Cd   | Flight time (s) | Range (m)");
    println!("  ------------------|-------|-----------------|----------");

    for (name, cd) in shapes {
        let input = SimulationInput {
            initial_velocity: 20.0,
            initial_height: 100.0,
            mass: 1.0,
            drag_coefficient: cd,
            area: 0.05,
        };
        let output = simulate(&input).expect("valid inputs");
        println!(
            "  {:17} | {:5.2} | {:15.2} | {:8.2}",
            name, cd, output.total_time, output.max_distance
        );
    }

    println!();
    println!("Drag shortens the range but stretches the flight: it slows the");
    println!("descent as well as the horizontal motion.");
}
