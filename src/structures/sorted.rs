//! List kept in ascending key order

/// Values ordered by an associated key.
///
/// Items with equal keys keep their insertion order. Built transiently by
/// the sequence store to pick the median layer by name.
#[derive(Debug, Clone)]
pub struct SortedList<K, V> {
    items: Vec<(K, V)>,
}

impl<K: Ord, V> SortedList<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Insert after every item whose key is `<= key`.
    pub fn add(&mut self, key: K, value: V) {
        let at = self.items.partition_point(|(k, _)| *k <= key);
        self.items.insert(at, (key, value));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.items.get(index).map(|(_, v)| v)
    }

    /// The median item. For an even count, the lower of the two middle items.
    pub fn lower_median(&self) -> Option<&V> {
        if self.items.is_empty() {
            return None;
        }
        self.get((self.items.len() - 1) / 2)
    }

    /// Values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.items.iter().map(|(_, v)| v)
    }
}
