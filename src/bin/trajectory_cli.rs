use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;

use projectile_engine::{simulate, SimulationInput, SimulationOutput, TrajectoryIntegrator};

#[derive(Parser)]
#[command(name = "trajectory")]
#[command(version = "0.1.0")]
#[command(about = "Projectile trajectory calculator with quadratic drag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a horizontally launched projectile
    Simulate {
        /// Initial horizontal velocity (m/s)
        #[arg(short = 'v', long, allow_negative_numbers = true)]
        velocity: f64,

        /// Launch height above the ground (m)
        #[arg(long)]
        height: f64,

        /// Projectile mass (kg)
        #[arg(short = 'm', long, default_value = "1.0")]
        mass: f64,

        /// Drag coefficient (0.47 sphere, 1.05 cube)
        #[arg(short = 'c', long, default_value = "0.47")]
        drag_coefficient: f64,

        /// Frontal area (m²)
        #[arg(short = 'a', long, default_value = "0.01")]
        area: f64,

        /// Integration time step (seconds)
        #[arg(long)]
        time_step: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show all trajectory samples instead of a condensed table
        #[arg(long)]
        full: bool,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            velocity,
            height,
            mass,
            drag_coefficient,
            area,
            time_step,
            output,
            full,
        } => {
            let input = SimulationInput {
                initial_velocity: velocity,
                initial_height: height,
                mass,
                drag_coefficient,
                area,
            };

            let result = match time_step {
                Some(dt) => {
                    let mut integrator = TrajectoryIntegrator::new();
                    integrator.set_time_step(dt);
                    integrator.solve(&input)?
                }
                None => simulate(&input)?,
            };

            display_results(&result, output, full)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      PROJECTILE ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Horizontal-launch trajectory engine    ║");
            println!("║ with quadratic aerodynamic drag.       ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Semi-implicit Euler integration      ║");
            println!("║ • Per-axis quadratic drag model        ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_results(
    result: &SimulationOutput,
    output: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }

        OutputFormat::Csv => {
            println!("time,position_x,position_y");
            for sample in &result.trajectory {
                println!("{},{},{}", sample.time, sample.position_x, sample.position_y);
            }
        }

        OutputFormat::Table => {
            println!("Flight time: {:.2} s", result.total_time);
            println!("Range:       {:.2} m", result.max_distance);
            println!();
            println!("  Time (s) |   X (m)  |   Y (m)");
            println!("  ---------|----------|---------");

            let stride = if full {
                1
            } else {
                (result.trajectory.len() / 20).max(1)
            };
            for sample in result.trajectory.iter().step_by(stride) {
                println!(
                    "  {:8.2} | {:8.2} | {:8.2}",
                    sample.time, sample.position_x, sample.position_y
                );
            }

            // Always show the impact sample
            if stride > 1 && (result.trajectory.len() - 1) % stride != 0 {
                if let Some(last) = result.trajectory.last() {
                    println!(
                        "  {:8.2} | {:8.2} | {:8.2}",
                        last.time, last.position_x, last.position_y
                    );
                }
            }
        }
    }

    Ok(())
}
