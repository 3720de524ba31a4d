#![deny(clippy::all, clippy::pedantic)]
//! # Oracle
//!
//! Prints analytical ground contact times and reference trajectories for
//! checking a numerical simulation by hand or from scripts.
//!
//! ```text
//! oracle solve --position 0,0,10
//! oracle scenario projectiles --timestep 0.001
//! oracle scenario runs/drop.json --json
//! oracle trajectory --position 0,0,10 --dt 0.01 --raw drop.bin
//! ```

mod app;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use kinematics::Vec3;

#[derive(Parser, Debug)]
#[command(name = "oracle", version, about = "Analytical free-fall reference values")]
struct Cli {
    /// Log solver diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Contact time and position of a single body
    Solve {
        #[command(flatten)]
        body: BodyArgs,

        /// Solve the vertical axis only
        #[arg(long)]
        vertical_only: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Contact report for a preset (free-fall, projectiles) or a JSON file
    Scenario {
        source: String,

        /// Gravity magnitude overriding the scenario's, m/s²
        #[arg(long)]
        gravity: Option<f64>,

        /// Simulation timestep overriding the scenario's, s
        #[arg(long)]
        timestep: Option<f64>,

        #[arg(long)]
        json: bool,
    },
    /// Analytic samples from release to ground contact
    Trajectory {
        #[command(flatten)]
        body: BodyArgs,

        #[arg(long, default_value_t = 0.01)]
        dt: f64,

        /// Write the samples as a raw f64 buffer instead of JSON
        #[arg(long)]
        raw: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct BodyArgs {
    /// Initial position, "x,y,z"
    #[arg(long, allow_hyphen_values = true)]
    position: Vec3,

    /// Initial velocity, "x,y,z"
    #[arg(long, allow_hyphen_values = true, default_value = "0,0,0")]
    velocity: Vec3,

    /// Position at which contact occurs, "x,y,z"
    #[arg(long, allow_hyphen_values = true, default_value = "0,0,0")]
    boundary: Vec3,

    /// Acceleration, "x,y,z"
    #[arg(long, allow_hyphen_values = true, default_value = "0,0,-9.81")]
    gravity: Vec3,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    app::run(cli.command)
}
