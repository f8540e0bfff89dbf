//! Layers command implementation

use serde::Serialize;
use std::process::ExitCode;

use crate::registry::LayerCatalog;

use super::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Serialize)]
struct LayerInfo<'a> {
    index: usize,
    name: &'a str,
}

/// Execute the layers command
pub fn run_layers(json: bool) -> ExitCode {
    let catalog = LayerCatalog::builtin();

    if json {
        let infos: Vec<LayerInfo> =
            catalog.iter().map(|layer| LayerInfo { index: layer.index(), name: layer.name() }).collect();
        match serde_json::to_string_pretty(&infos) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("Built-in layers:");
        for layer in catalog.iter() {
            println!("  {:>2}  {}", layer.index(), layer.name());
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}
