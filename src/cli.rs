// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::cube::PivotMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "rubiks-cube")]
#[command(about = "Interactive 3x3x3 Rubik's Cube simulator", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seconds per animated quarter turn (0 turns instantly)
    #[arg(long)]
    pub duration: Option<f32>,

    /// Rotation pivot for layer turns
    #[arg(long, value_enum)]
    pub pivot: Option<PivotMode>,

    /// Run a move sequence such as "R U R' U'" without a window and print
    /// the final state as JSON
    #[arg(long)]
    pub moves: Option<String>,

    /// Tick rate for --moves
    #[arg(long, default_value_t = 60.0)]
    pub hz: f32,
}
