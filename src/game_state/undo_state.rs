use std::collections::VecDeque;

use crate::game_state::checkers_rules::UNDO_CAPACITY;
use crate::game_state::game_state::GameState;

/// Bounded stack of pre-move snapshots. The oldest snapshot is dropped once
/// `capacity` is exceeded.
#[derive(Debug, Clone)]
pub struct UndoStack {
    snapshots: VecDeque<GameState>,
    capacity: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::with_capacity(UNDO_CAPACITY)
    }
}

impl UndoStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(UNDO_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, snapshot: GameState) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
