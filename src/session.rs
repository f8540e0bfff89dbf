//! A drawing session: one grid plus its undo and replay history
//!
//! Every user-level operation goes through [`Session`] so that both trackers
//! see the same sequence of actions. Replaying rebuilds the grid from scratch
//! and feeds it the recorded actions in order.

use crate::action::PaintAction;
use crate::config::HistoryConfig;
use crate::grid::Grid;
use crate::history::{ReplayTracker, UndoTracker};
use crate::layers::Layer;

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    undo: UndoTracker,
    replay: ReplayTracker,
}

impl Session {
    pub fn new(grid: Grid, history: &HistoryConfig) -> Self {
        Self {
            grid,
            undo: UndoTracker::new(history.undo_capacity),
            replay: ReplayTracker::new(history.replay_capacity),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn undo_tracker(&self) -> &UndoTracker {
        &self.undo
    }

    pub fn replay_tracker(&self) -> &ReplayTracker {
        &self.replay
    }

    /// Paint with the current brush. Returns the number of cells changed.
    pub fn paint(&mut self, layer: &Layer, x: usize, y: usize) -> usize {
        let action = self.grid.paint(layer, x, y);
        self.record(action)
    }

    /// Erase with the current brush. Returns the number of cells changed.
    pub fn erase(&mut self, layer: &Layer, x: usize, y: usize) -> usize {
        let action = self.grid.erase(layer, x, y);
        self.record(action)
    }

    /// Trigger the special effect on every cell.
    pub fn special(&mut self) {
        self.grid.special();
        self.record(PaintAction::special());
    }

    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo.undo(&mut self.grid) {
            Some(action) => {
                self.replay.add_action(action.clone(), true);
                true
            }
            None => false,
        }
    }

    /// Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undo.redo(&mut self.grid) {
            Some(action) => {
                self.replay.add_action(action.clone(), false);
                true
            }
            None => false,
        }
    }

    /// Reset the grid to empty and switch the replay log into playback.
    /// Does nothing if playback has already started.
    pub fn start_replay(&mut self) {
        if self.replay.is_replaying() {
            log::debug!("replay already started");
            return;
        }
        self.grid = self.grid.fresh();
        self.replay.start_replay();
    }

    pub fn is_replaying(&self) -> bool {
        self.replay.is_replaying()
    }

    /// Play one recorded action. Returns `true` once the log is exhausted.
    pub fn replay_step(&mut self) -> bool {
        self.replay.play_next_action(&mut self.grid)
    }

    /// Play every remaining recorded action. Returns how many were played.
    pub fn replay_all(&mut self) -> usize {
        let mut played = 0;
        while !self.replay_step() {
            played += 1;
        }
        log::info!("replayed {} actions", played);
        played
    }

    /// Strokes that changed nothing are not recorded.
    fn record(&mut self, action: PaintAction) -> usize {
        let changed = action.steps.len();
        if action.is_empty() {
            return changed;
        }
        self.replay.add_action(action.clone(), false);
        self.undo.add_action(action);
        changed
    }
}
