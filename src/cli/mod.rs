//! The `lpaint` command line: argument parsing and dispatch to one
//! submodule per subcommand.

mod layers;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::store::DrawStyle;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// lpaint - Run paint scripts against a layered grid and render to PNG
#[derive(Parser)]
#[command(name = "lpaint")]
#[command(about = "lpaint - Run paint scripts against a layered grid and render to PNG")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a paint script and render the final grid to PNG
    Render {
        /// Script of paint operations (.jsonl or .json5)
        script: PathBuf,

        /// Output file (default: the script path with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw style for every cell: set, add or sequence
        #[arg(long)]
        style: Option<DrawStyle>,

        /// Grid width in cells
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in cells
        #[arg(long)]
        height: Option<usize>,

        /// Starting color of every cell (e.g. "#202020" or "rebeccapurple")
        #[arg(long)]
        background: Option<String>,

        /// Most actions the undo stack keeps (later ones are not undoable)
        #[arg(long)]
        undo_capacity: Option<usize>,

        /// Most actions the replay log keeps (oldest are dropped)
        #[arg(long)]
        replay_capacity: Option<usize>,

        /// Timestamp handed to time-dependent layers
        #[arg(long, default_value = "0")]
        timestamp: u64,

        /// Scale output by integer factor (1-64, default: 1)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=64))]
        scale: u8,

        /// Rebuild the grid by replaying the recorded history before rendering
        #[arg(long)]
        replay: bool,

        /// Path to paint.toml (default: search upward from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the built-in layers
    Layers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments and run the chosen subcommand
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            script,
            output,
            style,
            width,
            height,
            background,
            undo_capacity,
            replay_capacity,
            timestamp,
            scale,
            replay,
            config,
        } => render::run_render(
            &script,
            output.as_deref(),
            CliOverrides { style, width, height, background, undo_capacity, replay_capacity },
            timestamp,
            scale,
            replay,
            config.as_deref(),
        ),
        Commands::Layers { json } => layers::run_layers(json),
    }
}
