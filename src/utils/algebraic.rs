//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `Square` type used by the move codec.

use crate::errors::{AgentError, AgentResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> AgentResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(AgentError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(AgentError::InvalidSquare(square.to_owned()));
    }

    Square::from_coords(file - b'a', rank - b'1')
}

/// Convert a square to its two-character coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}
