//! layerpaint - Per-cell layer compositing for a 2D paint grid
//!
//! This library provides functionality to:
//! - Hold drawing layers per cell under SET, ADD or SEQUENCE semantics
//! - Resolve every cell into a color and render the grid to PNG
//! - Undo, redo and replay paint actions with bounded history
//! - Run JSON5 paint scripts against a session

pub mod action;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod output;
pub mod registry;
pub mod script;
pub mod session;
pub mod store;
pub mod structures;

pub use error::PaintError;
