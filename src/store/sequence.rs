//! Membership store: each layer type is either applied or not

use std::sync::Arc;

use super::LayerStore;
use crate::color::Color;
use crate::layers::Layer;
use crate::registry::LayerCatalog;
use crate::structures::{FixedUniverseBitSet, SortedList};

/// Tracks which catalog layers are applied, composed in catalog index order.
///
/// Layer `i` is recorded as member `i + 1` of a bitset sized to the catalog.
///
/// - add: ensure the layer type is applied
/// - erase: ensure the layer type is not applied
/// - special: of the applied layers, remove the one with the median name
///   (the lexicographically smaller of the two middles for an even count)
#[derive(Debug, Clone)]
pub struct SequenceLayerStore {
    applied: FixedUniverseBitSet,
    catalog: Arc<LayerCatalog>,
}

impl SequenceLayerStore {
    pub fn new(catalog: Arc<LayerCatalog>) -> Self {
        Self { applied: FixedUniverseBitSet::new(catalog.len()), catalog }
    }

    /// Applied layers in index order.
    pub fn applied(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.applied.iter().filter_map(|member| self.catalog.layer(member - 1))
    }

    pub fn contains(&self, layer: &Layer) -> bool {
        self.applied.contains(layer.index() + 1)
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

impl LayerStore for SequenceLayerStore {
    fn add(&mut self, layer: &Layer) -> bool {
        match self.applied.insert(layer.index() + 1) {
            Ok(added) => added,
            Err(e) => {
                log::warn!("layer '{}' is not in this store's catalog: {}", layer.name(), e);
                false
            }
        }
    }

    fn erase(&mut self, layer: &Layer) -> bool {
        self.applied.remove(layer.index() + 1)
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.applied().fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) {
        if self.applied.is_empty() {
            return;
        }

        let mut by_name = SortedList::with_capacity(self.applied.len());
        for member in self.applied.iter() {
            if let Some(layer) = self.catalog.layer(member - 1) {
                by_name.add(layer.name(), member);
            }
        }

        if let Some(&median) = by_name.lower_median() {
            log::trace!("sequence special removes layer index {}", median - 1);
            self.applied.remove(median);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{arithmetic_catalog, named_catalog};
    use image::Rgb;

    fn applied_names(store: &SequenceLayerStore) -> Vec<&str> {
        let mut names: Vec<&str> = store.applied().map(Layer::name).collect();
        names.sort_unstable();
        names
    }

    fn store_with_all(catalog: &Arc<LayerCatalog>) -> SequenceLayerStore {
        let mut store = SequenceLayerStore::new(Arc::clone(catalog));
        for layer in catalog.iter() {
            assert!(store.add(layer));
        }
        store
    }

    #[test]
    fn test_add_then_erase_leaves_empty() {
        let catalog = arithmetic_catalog();
        let layer = catalog.layer(1).unwrap();
        let mut store = SequenceLayerStore::new(Arc::clone(&catalog));

        assert!(!store.erase(layer));
        assert!(store.add(layer));
        assert!(!store.add(layer));
        assert!(store.contains(layer));
        assert!(store.erase(layer));
        assert!(!store.erase(layer));
        assert!(store.is_empty());
    }

    #[test]
    fn test_erase_absent_with_others_present() {
        let catalog = arithmetic_catalog();
        let mut store = SequenceLayerStore::new(Arc::clone(&catalog));
        store.add(catalog.layer(0).unwrap());

        assert!(!store.erase(catalog.layer(2).unwrap()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_composes_in_index_order() {
        let catalog = arithmetic_catalog();
        let (add_ten, double) = (catalog.layer(0).unwrap(), catalog.layer(1).unwrap());
        let start = Rgb([1, 1, 1]);

        let mut forward = SequenceLayerStore::new(Arc::clone(&catalog));
        forward.add(add_ten);
        forward.add(double);

        let mut backward = SequenceLayerStore::new(Arc::clone(&catalog));
        backward.add(double);
        backward.add(add_ten);

        assert_eq!(forward.get_color(start, 0, 0, 0), Rgb([22, 22, 22]));
        assert_eq!(backward.get_color(start, 0, 0, 0), Rgb([22, 22, 22]));
    }

    #[test]
    fn test_foreign_layer_outside_universe_is_rejected() {
        let small = named_catalog(&["only"]);
        let big = arithmetic_catalog();
        let mut store = SequenceLayerStore::new(small);

        assert!(!store.add(big.layer(2).unwrap()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_special_removes_median_odd() {
        let catalog = named_catalog(&["c", "a", "b"]);
        let mut store = store_with_all(&catalog);

        store.special();
        assert_eq!(applied_names(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_special_removes_lower_median_even() {
        let catalog = named_catalog(&["d", "b", "c", "a"]);
        let mut store = store_with_all(&catalog);

        store.special();
        assert_eq!(applied_names(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_special_single_and_empty() {
        let catalog = named_catalog(&["solo", "other"]);
        let mut store = SequenceLayerStore::new(Arc::clone(&catalog));

        store.special();
        assert!(store.is_empty());

        store.add(catalog.layer(1).unwrap());
        store.special();
        assert!(store.is_empty());
    }

    #[test]
    fn test_special_repeatedly_drains() {
        let catalog = named_catalog(&["e", "d", "c", "b", "a"]);
        let mut store = store_with_all(&catalog);

        store.special();
        assert_eq!(applied_names(&store), vec!["a", "b", "d", "e"]);
        store.special();
        assert_eq!(applied_names(&store), vec!["a", "d", "e"]);
        store.special();
        store.special();
        store.special();
        assert!(store.is_empty());
    }
}
