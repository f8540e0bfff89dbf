//! Render command implementation

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use crate::color::parse_color;
use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::grid::Grid;
use crate::output::{output_path, save_png, scale_image};
use crate::registry::LayerCatalog;
use crate::script::{parse_script, run_script};
use crate::session::Session;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the render command
pub fn run_render(
    script: &Path,
    output: Option<&Path>,
    overrides: CliOverrides,
    timestamp: u64,
    scale: u8,
    replay: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let config = match load_config(config_path).and_then(|c| merge_cli_overrides(c, &overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    // validate() has already checked the background parses
    let background = match parse_color(&config.canvas.background) {
        Ok(color) => color,
        Err(e) => {
            eprintln!("Error: Invalid background '{}': {}", config.canvas.background, e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let file = match File::open(script) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open script '{}': {}", script.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let entries = match parse_script(file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}: {}", script.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let catalog = LayerCatalog::builtin().into_shared();
    let grid = match Grid::from_config(&config, catalog) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut session = Session::new(grid, &config.history);
    let summary = match run_script(&mut session, &entries) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}: {}", script.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    log::info!(
        "ran {} operations, {} cell edits, {} empty undo/redo",
        summary.operations,
        summary.cells_changed,
        summary.history_misses
    );

    if replay {
        session.start_replay();
        session.replay_all();
    }

    let image = scale_image(session.grid().render(background, timestamp), scale);
    let path = output_path(script, output);
    if let Err(e) = save_png(&image, &path) {
        eprintln!("Error: Failed to save '{}': {}", path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", path.display());
    ExitCode::from(EXIT_SUCCESS)
}
