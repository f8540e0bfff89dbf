//! Per-cell layer stores
//!
//! Every grid cell owns one store. A store accumulates layers and resolves
//! them into a color on demand. There are exactly three variants, chosen once
//! per grid by [`DrawStyle`]:
//!
//! | Style      | `add`                  | `erase`              | `special`                    |
//! |------------|------------------------|----------------------|------------------------------|
//! | `Set`      | replace the one layer  | clear it             | toggle inverted output       |
//! | `Additive` | append to a FIFO       | drop the oldest      | reverse application order    |
//! | `Sequence` | mark the type applied  | unmark the type      | drop the median-by-name type |

mod additive;
mod sequence;
mod set;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::StoreConfig;
use crate::error::PaintError;
use crate::layers::Layer;
use crate::registry::LayerCatalog;

pub use additive::AdditiveLayerStore;
pub use sequence::SequenceLayerStore;
pub use set::SetLayerStore;

/// The four operations every store supports.
pub trait LayerStore {
    /// Add a layer. Returns true if the store actually changed.
    fn add(&mut self, layer: &Layer) -> bool;

    /// Erase with this layer selected. Returns true if the store actually changed.
    fn erase(&mut self, layer: &Layer) -> bool;

    /// The color this cell shows over `start` at `timestamp`.
    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color;

    /// The store's special effect.
    fn special(&mut self);
}

/// Which store variant a grid builds for its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    #[default]
    Set,
    #[serde(alias = "add")]
    Additive,
    Sequence,
}

impl DrawStyle {
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Additive, DrawStyle::Sequence];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStyle::Set => "SET",
            DrawStyle::Additive => "ADD",
            DrawStyle::Sequence => "SEQUENCE",
        }
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawStyle {
    type Err = PaintError;

    /// Accepts `SET`, `ADD`/`ADDITIVE` and `SEQUENCE`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SET" => Ok(DrawStyle::Set),
            "ADD" | "ADDITIVE" => Ok(DrawStyle::Additive),
            "SEQUENCE" => Ok(DrawStyle::Sequence),
            _ => Err(PaintError::InvalidConfiguration(format!(
                "unknown draw style '{}', expected one of SET, ADD, SEQUENCE",
                s
            ))),
        }
    }
}

/// A store of whichever variant the grid was built with.
#[derive(Debug, Clone)]
pub enum CellStore {
    Set(SetLayerStore),
    Additive(AdditiveLayerStore),
    Sequence(SequenceLayerStore),
}

impl CellStore {
    /// Build an empty store of the given style.
    pub fn new(style: DrawStyle, catalog: &Arc<LayerCatalog>, config: &StoreConfig) -> Self {
        match style {
            DrawStyle::Set => CellStore::Set(SetLayerStore::new()),
            DrawStyle::Additive => {
                CellStore::Additive(AdditiveLayerStore::new(config.additive_capacity, config.growth_factor))
            }
            DrawStyle::Sequence => CellStore::Sequence(SequenceLayerStore::new(Arc::clone(catalog))),
        }
    }

    pub fn style(&self) -> DrawStyle {
        match self {
            CellStore::Set(_) => DrawStyle::Set,
            CellStore::Additive(_) => DrawStyle::Additive,
            CellStore::Sequence(_) => DrawStyle::Sequence,
        }
    }

    fn inner(&self) -> &dyn LayerStore {
        match self {
            CellStore::Set(s) => s,
            CellStore::Additive(s) => s,
            CellStore::Sequence(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn LayerStore {
        match self {
            CellStore::Set(s) => s,
            CellStore::Additive(s) => s,
            CellStore::Sequence(s) => s,
        }
    }
}

impl LayerStore for CellStore {
    fn add(&mut self, layer: &Layer) -> bool {
        self.inner_mut().add(layer)
    }

    fn erase(&mut self, layer: &Layer) -> bool {
        self.inner_mut().erase(layer)
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.inner().get_color(start, timestamp, x, y)
    }

    fn special(&mut self) {
        self.inner_mut().special()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Small catalogs with easy-to-trace effects.

    use super::*;
    use image::Rgb;

    fn add_ten(c: Color, _: u64, _: usize, _: usize) -> Color {
        let Rgb([r, g, b]) = c;
        Rgb([r.saturating_add(10), g.saturating_add(10), b.saturating_add(10)])
    }

    fn double(c: Color, _: u64, _: usize, _: usize) -> Color {
        let Rgb([r, g, b]) = c;
        Rgb([r.saturating_mul(2), g.saturating_mul(2), b.saturating_mul(2)])
    }

    fn keep(c: Color, _: u64, _: usize, _: usize) -> Color {
        c
    }

    /// Index order `add_ten`, `double`, `keep`.
    pub(crate) fn arithmetic_catalog() -> Arc<LayerCatalog> {
        let mut catalog = LayerCatalog::new();
        catalog.register("add_ten", add_ten).unwrap();
        catalog.register("double", double).unwrap();
        catalog.register("keep", keep).unwrap();
        catalog.into_shared()
    }

    /// Identity effects whose names are not in index order.
    pub(crate) fn named_catalog(names: &[&str]) -> Arc<LayerCatalog> {
        let mut catalog = LayerCatalog::new();
        for name in names {
            catalog.register(*name, keep).unwrap();
        }
        catalog.into_shared()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::arithmetic_catalog;
    use super::*;
    use image::Rgb;

    #[test]
    fn test_draw_style_from_str() {
        assert_eq!("SET".parse::<DrawStyle>(), Ok(DrawStyle::Set));
        assert_eq!("add".parse::<DrawStyle>(), Ok(DrawStyle::Additive));
        assert_eq!("Additive".parse::<DrawStyle>(), Ok(DrawStyle::Additive));
        assert_eq!(" sequence ".parse::<DrawStyle>(), Ok(DrawStyle::Sequence));
        assert!(matches!("LAYERED".parse::<DrawStyle>(), Err(PaintError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_draw_style_display_round_trips() {
        for style in DrawStyle::ALL {
            assert_eq!(style.to_string().parse::<DrawStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_cell_store_dispatches_by_style() {
        let catalog = arithmetic_catalog();
        let add_ten = catalog.layer(0).unwrap().clone();
        let start = Rgb([1, 1, 1]);

        for style in DrawStyle::ALL {
            let mut store = CellStore::new(style, &catalog, &StoreConfig::default());
            assert_eq!(store.style(), style);
            assert!(!store.erase(&add_ten), "fresh {} store erase must be false", style);
            assert_eq!(store.get_color(start, 0, 0, 0), start);

            assert!(store.add(&add_ten));
            assert_eq!(store.get_color(start, 0, 0, 0), Rgb([11, 11, 11]));
        }
    }
}
