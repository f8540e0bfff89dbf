//! Paint actions: reversible batches of layer edits
//!
//! A [`PaintAction`] is what one user gesture did to the grid: the cell
//! edits of a brush stroke, or a grid-wide special effect. Undo and replay
//! drive actions only through [`Action::redo_apply`] and [`Action::undo_apply`].

use crate::grid::Grid;
use crate::history::Action;
use crate::layers::Layer;
use crate::store::LayerStore;

/// Whether a step added or erased its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Add,
    Erase,
}

impl StepKind {
    fn inverse(self) -> Self {
        match self {
            StepKind::Add => StepKind::Erase,
            StepKind::Erase => StepKind::Add,
        }
    }
}

/// One layer edit on one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStep {
    pub x: usize,
    pub y: usize,
    pub layer: Layer,
    pub kind: StepKind,
}

impl PaintStep {
    pub fn add(x: usize, y: usize, layer: Layer) -> Self {
        Self { x, y, layer, kind: StepKind::Add }
    }

    pub fn erase(x: usize, y: usize, layer: Layer) -> Self {
        Self { x, y, layer, kind: StepKind::Erase }
    }

    /// Perform the step. Returns whether the cell changed; out-of-bounds
    /// steps change nothing.
    pub fn redo_apply(&self, grid: &mut Grid) -> bool {
        self.run(grid, self.kind)
    }

    /// Perform the inverse of the step.
    pub fn undo_apply(&self, grid: &mut Grid) -> bool {
        self.run(grid, self.kind.inverse())
    }

    fn run(&self, grid: &mut Grid, kind: StepKind) -> bool {
        let Some(cell) = grid.get_mut(self.x, self.y) else {
            return false;
        };
        match kind {
            StepKind::Add => cell.add(&self.layer),
            StepKind::Erase => cell.erase(&self.layer),
        }
    }
}

/// An ordered batch of steps, optionally with a grid-wide special effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintAction {
    pub steps: Vec<PaintStep>,
    pub is_special: bool,
}

impl PaintAction {
    pub fn new(steps: Vec<PaintStep>, is_special: bool) -> Self {
        Self { steps, is_special }
    }

    /// An action that only triggers the special effect.
    pub fn special() -> Self {
        Self { steps: Vec::new(), is_special: true }
    }

    pub fn add_step(&mut self, step: PaintStep) {
        self.steps.push(step);
    }

    /// True when applying the action would do nothing.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && !self.is_special
    }
}

impl Action for PaintAction {
    type Target = Grid;

    /// Special first, then every step in order.
    fn redo_apply(&self, grid: &mut Grid) {
        if self.is_special {
            grid.special();
        }
        for step in &self.steps {
            step.redo_apply(grid);
        }
    }

    /// Every step inverted in reverse order, then special.
    fn undo_apply(&self, grid: &mut Grid) {
        for step in self.steps.iter().rev() {
            step.undo_apply(grid);
        }
        if self.is_special {
            grid.special();
        }
    }
}
