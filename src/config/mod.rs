//! Configuration for canvases, stores and history bounds
//!
//! Provides types and parsing for `paint.toml`.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, load_config, merge_cli_overrides, CliOverrides, ConfigError};
pub use schema::*;
