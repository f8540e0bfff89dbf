//! FIFO store: every layer applies on top of the ones before it

use super::LayerStore;
use crate::color::Color;
use crate::layers::Layer;
use crate::structures::BoundedCircularBuffer;

/// Layers applied oldest first.
///
/// - add: append as the newest layer (never rejected)
/// - erase: drop the oldest layer, whatever layer is selected
/// - special: reverse the application order
#[derive(Debug, Clone)]
pub struct AdditiveLayerStore {
    layers: BoundedCircularBuffer<Layer>,
    growth_factor: usize,
}

impl AdditiveLayerStore {
    /// `growth_factor` below 2 is raised to 2 so a full queue always gains room.
    pub fn new(capacity: usize, growth_factor: usize) -> Self {
        Self { layers: BoundedCircularBuffer::new(capacity), growth_factor: growth_factor.max(2) }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.layers.capacity()
    }

    /// Layers in application order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}

impl LayerStore for AdditiveLayerStore {
    fn add(&mut self, layer: &Layer) -> bool {
        if self.layers.is_full() {
            let capacity = (self.layers.len() + 1) * self.growth_factor;
            log::debug!("additive store full at {}, growing to {}", self.layers.capacity(), capacity);
            self.layers.grow(capacity);
        }
        match self.layers.append(layer.clone()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("additive store rejected layer '{}': {}", layer.name(), e);
                false
            }
        }
    }

    fn erase(&mut self, _layer: &Layer) -> bool {
        self.layers.serve().is_ok()
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.layers.iter().fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        self.layers.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::arithmetic_catalog;
    use image::Rgb;

    fn names(store: &AdditiveLayerStore) -> Vec<&str> {
        store.layers().map(Layer::name).collect()
    }

    #[test]
    fn test_layers_apply_oldest_first() {
        let catalog = arithmetic_catalog();
        let (add_ten, double) = (catalog.layer(0).unwrap(), catalog.layer(1).unwrap());
        let mut store = AdditiveLayerStore::new(10, 2);

        assert!(store.add(add_ten));
        assert!(store.add(double));
        assert!(store.add(add_ten));
        // ((1 + 10) * 2) + 10
        assert_eq!(store.get_color(Rgb([1, 1, 1]), 0, 0, 0), Rgb([32, 32, 32]));
    }

    #[test]
    fn test_same_layer_can_repeat() {
        let catalog = arithmetic_catalog();
        let add_ten = catalog.layer(0).unwrap();
        let mut store = AdditiveLayerStore::new(10, 2);

        assert!(store.add(add_ten));
        assert!(store.add(add_ten));
        assert_eq!(store.get_color(Rgb([0, 0, 0]), 0, 0, 0), Rgb([20, 20, 20]));
    }

    #[test]
    fn test_erase_removes_oldest() {
        let catalog = arithmetic_catalog();
        let (l1, l2) = (catalog.layer(0).unwrap(), catalog.layer(1).unwrap());
        let mut store = AdditiveLayerStore::new(10, 2);

        store.add(l1);
        store.add(l2);
        assert!(store.erase(l2));
        assert_eq!(names(&store), vec!["double"]);
        assert!(store.erase(l1));
        assert!(!store.erase(l1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_special_reverses_and_round_trips() {
        let catalog = arithmetic_catalog();
        let (add_ten, double) = (catalog.layer(0).unwrap(), catalog.layer(1).unwrap());
        let mut store = AdditiveLayerStore::new(10, 2);
        store.add(add_ten);
        store.add(double);
        let start = Rgb([5, 5, 5]);

        assert_eq!(store.get_color(start, 0, 0, 0), Rgb([30, 30, 30]));
        store.special();
        assert_eq!(names(&store), vec!["double", "add_ten"]);
        assert_eq!(store.get_color(start, 0, 0, 0), Rgb([20, 20, 20]));
        store.special();
        assert_eq!(names(&store), vec!["add_ten", "double"]);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let catalog = arithmetic_catalog();
        let (add_ten, double) = (catalog.layer(0).unwrap(), catalog.layer(1).unwrap());
        let mut store = AdditiveLayerStore::new(10, 2);

        for i in 0..10 {
            store.add(if i % 2 == 0 { add_ten } else { double });
        }
        assert_eq!(store.capacity(), 10);

        assert!(store.add(add_ten));
        assert_eq!(store.len(), 11);
        assert_eq!(store.capacity(), 22);

        let expected: Vec<&str> =
            (0..11).map(|i| if i % 2 == 0 { "add_ten" } else { "double" }).collect();
        assert_eq!(names(&store), expected);
    }

    #[test]
    fn test_grows_after_wraparound() {
        let catalog = arithmetic_catalog();
        let (add_ten, double) = (catalog.layer(0).unwrap(), catalog.layer(1).unwrap());
        let mut store = AdditiveLayerStore::new(2, 2);

        store.add(add_ten);
        store.add(add_ten);
        store.erase(add_ten);
        store.add(double);
        store.add(add_ten);

        assert_eq!(names(&store), vec!["add_ten", "double", "add_ten"]);
        assert_eq!(store.capacity(), 6);
    }
}
