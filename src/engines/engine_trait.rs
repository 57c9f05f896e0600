//! Selector abstraction used by the game manager.
//!
//! A selector sees only the two move enumerations of the current position and
//! returns one move together with the policy branch that produced it.

use crate::game_state::chess_types::Move;

/// Which rule of the selection policy picked the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionBranch {
    /// Uniform pick among captures that are also legal.
    LegalCapture,
    /// No capture is legal; the first pseudo-legal capture was taken.
    PseudoCaptureFallback,
    /// No captures at all; uniform pick among legal moves.
    AnyLegal,
    /// Nothing to play.
    NoMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Move,
    pub branch: SelectionBranch,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(&mut self, legal_moves: &[Move], capture_moves: &[Move]) -> EngineOutput;
}
