//! Configuration loading and discovery for `paint.toml`
//!
//! The file is looked up from the working directory upward; flags from the
//! command line are merged in last and the result is validated again.

use super::schema::PaintConfig;
use crate::store::DrawStyle;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "paint.toml";

/// Why paint.toml could not be used
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse paint.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Command-line flags that take precedence over paint.toml
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub style: Option<DrawStyle>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub background: Option<String>,
    pub undo_capacity: Option<usize>,
    pub replay_capacity: Option<usize>,
}

/// Find paint.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_config_from(cwd)
}

/// Find paint.toml in `start` or the nearest ancestor that has one.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate paint.toml.
///
/// An explicit `path` must exist. Without one the file is searched for with
/// [`find_config`], and defaults are used when none turns up.
pub fn load_config(path: Option<&Path>) -> Result<PaintConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(PaintConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<PaintConfig, ConfigError> {
    log::debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: PaintConfig = toml::from_str(&contents)?;
    check(config)
}

fn check(config: PaintConfig) -> Result<PaintConfig, ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}

/// Apply command-line flags on top of `config`, then validate again.
pub fn merge_cli_overrides(
    mut config: PaintConfig,
    overrides: &CliOverrides,
) -> Result<PaintConfig, ConfigError> {
    if let Some(style) = overrides.style {
        config.canvas.style = style;
    }
    if let Some(width) = overrides.width {
        config.canvas.width = width;
    }
    if let Some(height) = overrides.height {
        config.canvas.height = height;
    }
    if let Some(ref background) = overrides.background {
        config.canvas.background = background.clone();
    }
    if let Some(undo) = overrides.undo_capacity {
        config.history.undo_capacity = undo;
    }
    if let Some(replay) = overrides.replay_capacity {
        config.history.replay_capacity = replay;
    }

    check(config)
}
