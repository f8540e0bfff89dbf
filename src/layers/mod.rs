//! Layers: named, index-stable color transforms
//!
//! A [`Layer`] is an immutable handle onto one entry of a
//! [`LayerCatalog`](crate::registry::LayerCatalog). It carries the entry's
//! catalog index, its name, and the pure function that produces a new color
//! from an input color plus time/position context.

pub mod blend;
pub mod effects;

use std::fmt;
use std::sync::Arc;

use crate::color::Color;

pub use blend::BlendMode;

/// Signature of a layer effect: `(color, timestamp, x, y) -> color`.
///
/// Effects must be pure and deterministic.
pub type EffectFn = fn(Color, u64, usize, usize) -> Color;

/// A single catalog entry that can be painted onto a cell.
///
/// Equality is catalog identity: two layers are equal iff they share both
/// index and name. Cloning is cheap (the name is reference counted).
#[derive(Clone)]
pub struct Layer {
    index: usize,
    name: Arc<str>,
    effect: EffectFn,
}

impl Layer {
    pub(crate) fn new(index: usize, name: Arc<str>, effect: EffectFn) -> Self {
        Self { index, name, effect }
    }

    /// Position of this layer in its catalog.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name used for display and for median-by-name ordering.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the effect over `color` at `(x, y)` and `timestamp`.
    pub fn apply(&self, color: Color, timestamp: u64, x: usize, y: usize) -> Color {
        (self.effect)(color, timestamp, x, y)
    }
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.name == other.name
    }
}

impl Eq for Layer {}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer").field("index", &self.index).field("name", &self.name).finish()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
