//! Record-then-replay log of actions

use super::Action;
use crate::action::PaintAction;
use crate::config::DEFAULT_REPLAY_CAPACITY;
use crate::structures::BoundedCircularBuffer;

/// A FIFO log of `(action, is_undo)` pairs.
///
/// Actions are recorded until [`start_replay`](Self::start_replay), then
/// played back one at a time in recording order. A full log makes room by
/// discarding its oldest entry.
#[derive(Debug, Clone)]
pub struct ReplayTracker<A = PaintAction> {
    log: BoundedCircularBuffer<(A, bool)>,
    replaying: bool,
}

impl<A> Default for ReplayTracker<A> {
    fn default() -> Self {
        Self::new(DEFAULT_REPLAY_CAPACITY)
    }
}

impl<A> ReplayTracker<A> {
    pub fn new(capacity: usize) -> Self {
        Self { log: BoundedCircularBuffer::new(capacity), replaying: false }
    }

    /// Stop recording and start playing back.
    pub fn start_replay(&mut self) {
        log::debug!("replay started with {} recorded actions", self.log.len());
        self.replaying = true;
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Entries still waiting to be played.
    pub fn pending(&self) -> usize {
        self.log.len()
    }

    /// Record an action; `is_undo` marks actions that were undone rather
    /// than performed. Ignored once replay has started.
    pub fn add_action(&mut self, action: A, is_undo: bool) {
        if self.replaying {
            log::warn!("action recorded after replay started, ignored");
            return;
        }
        if self.log.is_full() {
            log::debug!("replay log full at {}, discarding oldest", self.log.capacity());
            let _ = self.log.serve();
        }
        if let Err(e) = self.log.append((action, is_undo)) {
            log::error!("replay log rejected action: {}", e);
        }
    }
}

impl<A: Action> ReplayTracker<A> {
    /// Play the oldest recorded action against `target`.
    ///
    /// Returns `true` if there was nothing left to play.
    pub fn play_next_action(&mut self, target: &mut A::Target) -> bool {
        let Ok((action, is_undo)) = self.log.serve() else {
            return true;
        };
        if is_undo {
            action.undo_apply(target);
        } else {
            action.redo_apply(target);
        }
        false
    }
}
