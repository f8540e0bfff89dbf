//! The layer catalog: an append-only, index-stable registry of layer effects.
//!
//! The catalog is populated once (usually with [`LayerCatalog::builtin`]) and
//! then shared read-only as an `Arc<LayerCatalog>`. Sequence stores size their
//! bitsets from it, so it must be complete before any grid is built.

mod traits;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::layers::effects::BUILTIN;
use crate::layers::{EffectFn, Layer};

pub use traits::Registry;

/// Error type for catalog registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A layer with this name is already registered
    #[error("layer '{0}' is already registered")]
    DuplicateName(String),
    /// Layer names must be non-empty
    #[error("layer name must not be empty")]
    EmptyName,
}

/// Registry of every layer effect known to the process.
#[derive(Debug, Default, Clone)]
pub struct LayerCatalog {
    layers: Vec<Layer>,
    by_name: HashMap<Arc<str>, usize>,
}

impl LayerCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog: every effect in [`BUILTIN`], in order.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (name, effect) in BUILTIN {
            // builtin names are unique and non-empty
            let _ = catalog.register(*name, *effect);
        }
        catalog
    }

    /// Append a new effect. Its index is the catalog length before the call.
    pub fn register(&mut self, name: impl Into<String>, effect: EffectFn) -> Result<Layer, CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.by_name.contains_key(name.as_str()) {
            return Err(CatalogError::DuplicateName(name));
        }

        let index = self.layers.len();
        let name: Arc<str> = Arc::from(name);
        let layer = Layer::new(index, Arc::clone(&name), effect);
        self.layers.push(layer.clone());
        self.by_name.insert(name, index);
        log::trace!("registered layer '{}' at index {}", layer.name(), index);
        Ok(layer)
    }

    /// Layer at `index`, if registered.
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// All layers in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Wrap in an `Arc` for sharing with grids and stores.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Registry<Layer> for LayerCatalog {
    fn get(&self, name: &str) -> Option<&Layer> {
        self.by_name.get(name).and_then(|&i| self.layers.get(i))
    }

    fn len(&self) -> usize {
        self.layers.len()
    }

    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.layers.iter().map(Layer::name))
    }
}
