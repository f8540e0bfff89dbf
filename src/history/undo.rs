//! Linear undo/redo over two bounded stacks

use super::Action;
use crate::action::PaintAction;
use crate::config::DEFAULT_UNDO_CAPACITY;
use crate::structures::BoundedStack;

/// Two stacks of actions: what can be undone and what can be redone.
///
/// - Adding a new action clears the redo stack (no branching timelines)
/// - Once the undo stack is full, new actions are dropped silently
#[derive(Debug, Clone)]
pub struct UndoTracker<A = PaintAction> {
    undo_stack: BoundedStack<A>,
    redo_stack: BoundedStack<A>,
}

impl<A> Default for UndoTracker<A> {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}

impl<A> UndoTracker<A> {
    /// Both stacks get `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self { undo_stack: BoundedStack::new(capacity), redo_stack: BoundedStack::new(capacity) }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record a new action. Dropped without error if the undo stack is full.
    pub fn add_action(&mut self, action: A) {
        if self.undo_stack.is_full() {
            log::debug!("undo stack full at {}, action dropped", self.undo_stack.capacity());
            return;
        }
        if self.undo_stack.push(action).is_ok() {
            self.redo_stack.clear();
        }
    }
}

impl<A: Action> UndoTracker<A> {
    /// Undo the most recent action against `target`.
    ///
    /// Returns the action that was undone, or `None` if there was nothing to undo.
    pub fn undo(&mut self, target: &mut A::Target) -> Option<&A> {
        let action = self.undo_stack.pop().ok()?;
        Self::transfer(action, &mut self.redo_stack, "redo")?;
        let action = self.redo_stack.peek()?;
        action.undo_apply(target);
        log::debug!("undo (remaining {})", self.undo_stack.len());
        Some(action)
    }

    /// Redo the most recently undone action against `target`.
    ///
    /// Returns the action that was redone, or `None` if there was nothing to redo.
    pub fn redo(&mut self, target: &mut A::Target) -> Option<&A> {
        let action = self.redo_stack.pop().ok()?;
        Self::transfer(action, &mut self.undo_stack, "undo")?;
        let action = self.undo_stack.peek()?;
        action.redo_apply(target);
        log::debug!("redo (remaining {})", self.redo_stack.len());
        Some(action)
    }

    /// Both stacks share one capacity and an action lives on at most one of
    /// them, so this push cannot overflow while `add_action` guards the bound.
    fn transfer(action: A, to: &mut BoundedStack<A>, name: &str) -> Option<()> {
        match to.push(action) {
            Ok(()) => Some(()),
            Err(e) => {
                log::error!("{} stack rejected action: {}", name, e);
                None
            }
        }
    }
}
