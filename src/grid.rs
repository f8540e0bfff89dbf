//! The canvas: a rectangle of cells, each owning one layer store
//!
//! Cells are addressed `(x, y)` with `(0, 0)` top-left, `x` the column and
//! `y` the row. The grid also owns the brush size used by [`Grid::paint`]
//! and [`Grid::erase`].

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use image::RgbaImage;
use rayon::prelude::*;

use crate::action::{PaintAction, PaintStep, StepKind};
use crate::color::{to_rgba, Color};
use crate::config::{PaintConfig, StoreConfig};
use crate::error::PaintError;
use crate::layers::Layer;
use crate::registry::LayerCatalog;
use crate::store::{CellStore, DrawStyle, LayerStore};

pub const DEFAULT_BRUSH_SIZE: usize = 2;
pub const MAX_BRUSH: usize = 5;
pub const MIN_BRUSH: usize = 0;

#[derive(Debug, Clone)]
pub struct Grid {
    style: DrawStyle,
    width: usize,
    height: usize,
    cells: Vec<CellStore>,
    brush_size: usize,
    catalog: Arc<LayerCatalog>,
    store_config: StoreConfig,
}

impl Grid {
    /// Build a `width` x `height` grid of empty stores of `style`.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if either dimension is zero.
    pub fn new(
        style: DrawStyle,
        width: usize,
        height: usize,
        catalog: Arc<LayerCatalog>,
        store_config: &StoreConfig,
    ) -> Result<Self, PaintError> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let cells = (0..width * height).map(|_| CellStore::new(style, &catalog, store_config)).collect();
        log::debug!("built {}x{} {} grid", width, height, style);

        Ok(Self {
            style,
            width,
            height,
            cells,
            brush_size: DEFAULT_BRUSH_SIZE,
            catalog,
            store_config: store_config.clone(),
        })
    }

    /// Build a grid from the `[canvas]` and `[store]` sections of a config.
    pub fn from_config(config: &PaintConfig, catalog: Arc<LayerCatalog>) -> Result<Self, PaintError> {
        Self::new(config.canvas.style, config.canvas.width, config.canvas.height, catalog, &config.store)
    }

    /// An empty grid with the same style, size and catalog.
    pub fn fresh(&self) -> Self {
        let cells =
            (0..self.cells.len()).map(|_| CellStore::new(self.style, &self.catalog, &self.store_config)).collect();
        Self {
            style: self.style,
            width: self.width,
            height: self.height,
            cells,
            brush_size: DEFAULT_BRUSH_SIZE,
            catalog: Arc::clone(&self.catalog),
            store_config: self.store_config.clone(),
        }
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn catalog(&self) -> &Arc<LayerCatalog> {
        &self.catalog
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&CellStore> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut CellStore> {
        let offset = self.offset(x, y)?;
        Some(&mut self.cells[offset])
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Grow the brush by one, stopping at [`MAX_BRUSH`].
    pub fn increase_brush_size(&mut self) {
        if self.brush_size < MAX_BRUSH {
            self.brush_size += 1;
        }
    }

    /// Shrink the brush by one, stopping at [`MIN_BRUSH`].
    pub fn decrease_brush_size(&mut self) {
        if self.brush_size > MIN_BRUSH {
            self.brush_size -= 1;
        }
    }

    /// Set the brush size, clamped to `MIN_BRUSH..=MAX_BRUSH`.
    pub fn set_brush_size(&mut self, size: usize) {
        self.brush_size = size.clamp(MIN_BRUSH, MAX_BRUSH);
    }

    /// Trigger every cell's special effect.
    pub fn special(&mut self) {
        for cell in &mut self.cells {
            cell.special();
        }
    }

    /// Resolved color of one cell, `None` out of bounds.
    pub fn get_color(&self, x: usize, y: usize, start: Color, timestamp: u64) -> Option<Color> {
        self.get(x, y).map(|cell| cell.get_color(start, timestamp, x, y))
    }

    /// Resolve every cell into one pixel each.
    pub fn render(&self, start: Color, timestamp: u64) -> RgbaImage {
        let width = self.width;
        let colors: Vec<Color> = self
            .cells
            .par_iter()
            .enumerate()
            .map(|(i, cell)| cell.get_color(start, timestamp, i % width, i / width))
            .collect();

        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            to_rgba(colors[y as usize * width + x as usize])
        })
    }

    /// Paint `layer` with the brush centred on `(px, py)`.
    ///
    /// Returns the action holding the steps that changed a cell.
    pub fn paint(&mut self, layer: &Layer, px: usize, py: usize) -> PaintAction {
        self.stroke(layer, px, py, StepKind::Add)
    }

    /// Erase with `layer` selected, brush centred on `(px, py)`.
    pub fn erase(&mut self, layer: &Layer, px: usize, py: usize) -> PaintAction {
        self.stroke(layer, px, py, StepKind::Erase)
    }

    fn stroke(&mut self, layer: &Layer, px: usize, py: usize, kind: StepKind) -> PaintAction {
        let mut action = PaintAction::default();
        for (x, y) in self.brush_cells(px, py) {
            let step = PaintStep { x, y, layer: layer.clone(), kind };
            if step.redo_apply(self) {
                action.add_step(step);
            }
        }
        log::trace!("{:?} stroke at ({}, {}) changed {} cells", kind, px, py, action.steps.len());
        action
    }

    /// In-bounds cells within Manhattan distance `brush_size` of `(px, py)`.
    fn brush_cells(&self, px: usize, py: usize) -> Vec<(usize, usize)> {
        let b = self.brush_size;
        let x_end = px.saturating_add(b).min(self.width - 1);
        let y_end = py.saturating_add(b).min(self.height - 1);

        let mut cells = Vec::new();
        for x in px.saturating_sub(b)..=x_end {
            for y in py.saturating_sub(b)..=y_end {
                if x.abs_diff(px) + y.abs_diff(py) <= b {
                    cells.push((x, y));
                }
            }
        }
        cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellStore;

    /// Panics if `(x, y)` is out of bounds.
    fn index(&self, (x, y): (usize, usize)) -> &CellStore {
        match self.offset(x, y) {
            Some(i) => &self.cells[i],
            None => panic!("cell ({}, {}) out of bounds for {}x{} grid", x, y, self.width, self.height),
        }
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut CellStore {
        match self.offset(x, y) {
            Some(i) => &mut self.cells[i],
            None => panic!("cell ({}, {}) out of bounds for {}x{} grid", x, y, self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use crate::registry::Registry;
    use image::{Rgb, Rgba};

    fn grid(style: DrawStyle, w: usize, h: usize) -> Grid {
        Grid::new(style, w, h, LayerCatalog::builtin().into_shared(), &StoreConfig::default()).unwrap()
    }

    fn layer(grid: &Grid, name: &str) -> Layer {
        grid.catalog().get(name).cloned().unwrap()
    }

    #[test]
    fn test_zero_dimension_is_invalid() {
        let catalog = LayerCatalog::builtin().into_shared();
        let err = Grid::new(DrawStyle::Set, 0, 3, catalog, &StoreConfig::default()).unwrap_err();
        assert!(matches!(err, PaintError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_every_cell_uses_grid_style() {
        for style in DrawStyle::ALL {
            let g = grid(style, 3, 2);
            for y in 0..2 {
                for x in 0..3 {
                    assert_eq!(g[(x, y)].style(), style);
                }
            }
            assert!(g.get(3, 0).is_none());
            assert!(g.get(0, 2).is_none());
        }
    }

    #[test]
    fn test_brush_size_bounds() {
        let mut g = grid(DrawStyle::Set, 1, 1);
        assert_eq!(g.brush_size(), DEFAULT_BRUSH_SIZE);

        for _ in 0..10 {
            g.increase_brush_size();
        }
        assert_eq!(g.brush_size(), MAX_BRUSH);

        for _ in 0..10 {
            g.decrease_brush_size();
        }
        assert_eq!(g.brush_size(), MIN_BRUSH);

        g.set_brush_size(99);
        assert_eq!(g.brush_size(), MAX_BRUSH);
    }

    #[test]
    fn test_brush_is_a_clipped_diamond() {
        let mut g = grid(DrawStyle::Set, 5, 5);
        g.set_brush_size(1);
        assert_eq!(g.brush_cells(2, 2), vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
        assert_eq!(g.brush_cells(0, 0), vec![(0, 0), (0, 1), (1, 0)]);

        g.set_brush_size(0);
        assert_eq!(g.brush_cells(4, 4), vec![(4, 4)]);
        assert!(g.brush_cells(9, 9).is_empty());
    }

    #[test]
    fn test_paint_records_only_changed_cells() {
        let mut g = grid(DrawStyle::Set, 4, 4);
        let black = layer(&g, "black");
        g.set_brush_size(1);

        let first = g.paint(&black, 0, 0);
        assert_eq!(first.steps.len(), 3);

        g.set_brush_size(0);
        let again = g.paint(&black, 0, 0);
        assert!(again.steps.is_empty());
        assert!(again.is_empty());
    }

    #[test]
    fn test_erase_stroke() {
        let mut g = grid(DrawStyle::Sequence, 3, 3);
        let red = layer(&g, "red");
        g.set_brush_size(0);
        g.paint(&red, 1, 1);

        let erased = g.erase(&red, 1, 1);
        assert_eq!(erased.steps.len(), 1);
        assert_eq!(erased.steps[0].kind, StepKind::Erase);
        assert_eq!(g.get_color(1, 1, BLACK, 0), Some(BLACK));
    }

    #[test]
    fn test_special_hits_every_cell() {
        let mut g = grid(DrawStyle::Set, 2, 2);
        g.special();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(g.get_color(x, y, BLACK, 0), Some(Rgb([255, 255, 255])));
            }
        }
    }

    #[test]
    fn test_render_places_cells_by_coordinate() {
        let mut g = grid(DrawStyle::Additive, 3, 2);
        let red = layer(&g, "red");
        g.set_brush_size(0);
        g.paint(&red, 2, 1);

        let img = g.render(BLACK, 0);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(*img.get_pixel(2, 1), Rgba([128, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_fresh_keeps_shape_drops_content() {
        let mut g = grid(DrawStyle::Additive, 2, 3);
        let red = layer(&g, "red");
        g.paint(&red, 0, 0);
        g.set_brush_size(4);

        let f = g.fresh();
        assert_eq!((f.width(), f.height(), f.style()), (2, 3, DrawStyle::Additive));
        assert_eq!(f.brush_size(), DEFAULT_BRUSH_SIZE);
        assert_eq!(f.get_color(0, 0, BLACK, 0), Some(BLACK));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let g = grid(DrawStyle::Set, 2, 2);
        let _ = &g[(2, 0)];
    }
}
