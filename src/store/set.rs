//! Single-layer store with an inverted output mode

use super::LayerStore;
use crate::color::Color;
use crate::layers::effects::invert;
use crate::layers::Layer;

/// Holds at most one layer.
///
/// - add: replace the held layer
/// - erase: clear it, whatever layer is selected
/// - special: toggle inverting the final color
#[derive(Debug, Clone, Default)]
pub struct SetLayerStore {
    layer: Option<Layer>,
    inverted: bool,
}

impl SetLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self) -> Option<&Layer> {
        self.layer.as_ref()
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for SetLayerStore {
    fn add(&mut self, layer: &Layer) -> bool {
        if self.layer.as_ref() == Some(layer) {
            return false;
        }
        self.layer = Some(layer.clone());
        true
    }

    fn erase(&mut self, _layer: &Layer) -> bool {
        self.layer.take().is_some()
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        let color = match &self.layer {
            Some(layer) => layer.apply(start, timestamp, x, y),
            None => start,
        };
        if self.inverted {
            invert(color, timestamp, x, y)
        } else {
            color
        }
    }

    fn special(&mut self) {
        self.inverted = !self.inverted;
    }
}
