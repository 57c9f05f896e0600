//! Contract between the agent and the engine core that owns move generation.
//!
//! The agent never generates or validates moves itself. It asks the core for
//! two enumerations, applies moves through it and round-trips positions as
//! FEN when a controller supplies one.

use crate::errors::AgentResult;
use crate::game_state::chess_types::{Color, Move};

pub trait EngineCore: Clone {
    /// All legal moves of the side to move.
    fn legal_moves(&self) -> Vec<Move>;

    /// Pseudo-legal captures of the side to move, plus queen promotions.
    /// Generated independently of `legal_moves`, so entries may be missing
    /// from the legal list.
    fn capture_moves(&self) -> Vec<Move>;

    fn fen(&self) -> String;

    fn set_fen(&mut self, fen: &str, alt_castling: bool) -> AgentResult<()>;

    /// Apply a move from either enumeration, or `Move::NULL`.
    fn apply_move(&mut self, mv: Move) -> AgentResult<()>;

    /// Castling is written king-to-rook when set, king-to-landing-square otherwise.
    fn is_alt_castling(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Plies played since the position's game start, derived from the move counters.
    fn ply(&self) -> u32;
}
