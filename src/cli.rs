// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::Preset;

#[derive(Parser, Debug, Clone)]
#[command(name = "ray-animator")]
#[command(about = "Tick-animated CPU ray tracer", long_about = None)]
pub struct Cli {
    /// Scene description (JSON) to render
    #[arg(long, conflicts_with = "preset")]
    pub scene: Option<PathBuf>,

    /// Built-in scene to render when no scene file is given
    #[arg(long, value_enum, default_value = "default")]
    pub preset: Preset,

    /// Override the scene's output filename
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Render worker threads (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Render a single still image even if the scene is animated
    #[arg(long, default_value = "false")]
    pub still: bool,
}
