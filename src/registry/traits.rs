//! Name-keyed lookup shared by catalogs

/// Read access to values registered under unique names.
///
/// ```
/// use layerpaint::registry::{LayerCatalog, Registry};
///
/// let catalog = LayerCatalog::builtin();
///
/// assert!(catalog.contains("invert"));
/// assert_eq!(Registry::get(&catalog, "black").map(|l| l.index()), Some(1));
/// assert_eq!(catalog.names().next(), Some("rainbow"));
/// ```
pub trait Registry<V> {
    fn get(&self, name: &str) -> Option<&V>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names in registration order.
    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
