//! Undo/redo and replay bookkeeping
//!
//! Both trackers are bounded and hold actions opaquely: they never look
//! inside a store, they only call [`Action::redo_apply`] and
//! [`Action::undo_apply`] on whatever target they are handed.
//!
//! ```text
//! UndoTracker
//! ├── undo_stack: BoundedStack<A>   (most recent on top)
//! └── redo_stack: BoundedStack<A>   (cleared by every new action)
//!
//! ReplayTracker
//! ├── log: BoundedCircularBuffer<(A, is_undo)>
//! └── replaying: bool
//! ```

mod replay;
mod undo;

pub use replay::ReplayTracker;
pub use undo::UndoTracker;

/// Something that can be applied forward and backward against a target.
pub trait Action {
    type Target;

    /// Apply the action's effect.
    fn redo_apply(&self, target: &mut Self::Target);

    /// Reverse the action's effect.
    fn undo_apply(&self, target: &mut Self::Target);
}
