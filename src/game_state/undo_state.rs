//! Snapshot arena backing the game's undo history.
//!
//! Snapshots live in a `Vec` owned by the game; the game refers to the active
//! one only by index. A reset truncates the arena to a single fresh root, so no
//! stale reference to a discarded snapshot can survive it.

use crate::game_state::chess_types::Move;

/// Single undo record: the move that produced this ply and the position before it.
#[derive(Debug, Clone)]
pub struct UndoState<C> {
    pub mv: Move,
    pub position_before: Option<C>,
}

impl<C> UndoState<C> {
    fn root() -> Self {
        Self {
            mv: Move::NONE,
            position_before: None,
        }
    }
}

/// Append-only list of snapshots; always holds at least the root.
#[derive(Debug, Clone)]
pub struct StateList<C> {
    states: Vec<UndoState<C>>,
}

impl<C> Default for StateList<C> {
    fn default() -> Self {
        Self {
            states: vec![UndoState::root()],
        }
    }
}

impl<C> StateList<C> {
    /// Record a ply and return the index of the new active snapshot.
    pub fn push(&mut self, mv: Move, position_before: C) -> usize {
        self.states.push(UndoState {
            mv,
            position_before: Some(position_before),
        });
        self.states.len() - 1
    }

    /// Remove the newest snapshot. The root is never removed.
    pub fn pop(&mut self) -> Option<UndoState<C>> {
        if self.states.len() > 1 {
            self.states.pop()
        } else {
            None
        }
    }

    /// Drop the whole history and start over with a single root snapshot.
    pub fn reset(&mut self) -> usize {
        self.states.clear();
        self.states.push(UndoState::root());
        0
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.states.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::StateList;
    use crate::game_state::chess_types::Move;

    #[test]
    fn root_is_kept_on_pop_and_reset() {
        let mut states = StateList::<u8>::default();
        assert_eq!(states.len(), 1);
        assert!(states.pop().is_none());

        assert_eq!(states.push(Move::NULL, 1), 1);
        assert_eq!(states.push(Move::NULL, 2), 2);
        assert_eq!(states.len(), 3);
        assert_eq!(states.last_index(), 2);

        let popped = states.pop().expect("newest snapshot should pop");
        assert_eq!(popped.position_before, Some(2));

        assert_eq!(states.reset(), 0);
        assert_eq!(states.len(), 1);
        assert_eq!(states.last_index(), 0);
        assert!(states.pop().is_none());
    }
}
