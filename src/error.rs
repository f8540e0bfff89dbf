//! Errors surfaced to library callers

use thiserror::Error;

/// Construction-time failures.
///
/// Structural problems inside stores and trackers never surface here; they
/// are absorbed into boolean results. Only misconfiguration is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    /// Unknown draw style, zero-sized canvas, zero capacity and the like
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
