//! Configuration schema types for `paint.toml`
//!
//! Every section and field is optional; missing values fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::store::DrawStyle;

/// Undo/redo stack depth used when nothing else is configured.
pub const DEFAULT_UNDO_CAPACITY: usize = 10_000;
/// Replay log length used when nothing else is configured.
pub const DEFAULT_REPLAY_CAPACITY: usize = 10_000;
/// Initial queue capacity of each additive store.
pub const DEFAULT_ADDITIVE_CAPACITY: usize = 10;
/// Additive stores grow to `(len + 1) * growth_factor` when full.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// History section: bounds on undo/redo and replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Capacity of both the undo and the redo stack
    #[serde(default = "default_undo_capacity")]
    pub undo_capacity: usize,
    /// Capacity of the replay log
    #[serde(default = "default_replay_capacity")]
    pub replay_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { undo_capacity: DEFAULT_UNDO_CAPACITY, replay_capacity: DEFAULT_REPLAY_CAPACITY }
    }
}

fn default_undo_capacity() -> usize {
    DEFAULT_UNDO_CAPACITY
}

fn default_replay_capacity() -> usize {
    DEFAULT_REPLAY_CAPACITY
}

/// Store section: sizing of per-cell layer stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Initial capacity of an additive store's queue
    #[serde(default = "default_additive_capacity")]
    pub additive_capacity: usize,
    /// Multiplier applied to the new length when an additive store grows
    #[serde(default = "default_growth_factor")]
    pub growth_factor: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { additive_capacity: DEFAULT_ADDITIVE_CAPACITY, growth_factor: DEFAULT_GROWTH_FACTOR }
    }
}

fn default_additive_capacity() -> usize {
    DEFAULT_ADDITIVE_CAPACITY
}

fn default_growth_factor() -> usize {
    DEFAULT_GROWTH_FACTOR
}

/// Canvas section: defaults for new grids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_size")]
    pub width: usize,
    #[serde(default = "default_canvas_size")]
    pub height: usize,
    /// Layer store variant used for every cell
    #[serde(default)]
    pub style: DrawStyle,
    /// Base color each cell's layers are composed over
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            style: DrawStyle::default(),
            background: default_background(),
        }
    }
}

fn default_canvas_size() -> usize {
    32
}

fn default_background() -> String {
    "#000000".to_string()
}

/// Root of `paint.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "store.growth_factor")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "paint.toml: '{}' {}", self.field, self.message)
    }
}

impl PaintConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut positive = |field: &str, value: usize| {
            if value == 0 {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            }
        };

        positive("history.undo_capacity", self.history.undo_capacity);
        positive("history.replay_capacity", self.history.replay_capacity);
        positive("store.additive_capacity", self.store.additive_capacity);
        positive("canvas.width", self.canvas.width);
        positive("canvas.height", self.canvas.height);

        if self.store.growth_factor < 2 {
            errors.push(ConfigValidationError {
                field: "store.growth_factor".to_string(),
                message: "must be at least 2".to_string(),
            });
        }

        if let Err(e) = parse_color(&self.canvas.background) {
            errors.push(ConfigValidationError {
                field: "canvas.background".to_string(),
                message: format!("is not a color: {}", e),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
