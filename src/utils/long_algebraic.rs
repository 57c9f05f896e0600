//! Coordinate notation codec (`e2e4`, `a7a8q`, `e1g1`).
//!
//! Castling is stored as king-captures-rook. In standard notation the rook
//! square is rewritten to the king's landing square on the g- or c-file; in
//! alternate (Chess960-style) notation the rook square is written unchanged.

use crate::game_state::chess_types::{Move, MoveKind, PieceKind, Square};
use crate::move_generation::move_generator::EngineCore;
use crate::utils::algebraic::square_to_algebraic;

const PROMOTION_LETTERS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];

const FILE_C: u8 = 2;
const FILE_G: u8 = 6;

pub fn move_to_long_algebraic(mv: Move, alt_castling: bool) -> String {
    match mv.kind {
        MoveKind::None => return "(none)".to_owned(),
        MoveKind::Null => return "0000".to_owned(),
        _ => {}
    }

    let to = if mv.kind == MoveKind::Castling && !alt_castling {
        castling_landing_square(mv.from, mv.to)
    } else {
        mv.to
    };

    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(to));

    if mv.kind == MoveKind::Promotion {
        if let Some(piece) = mv.promotion {
            out.push(promotion_to_char(piece));
        }
    }

    out
}

/// Decode controller text against the moves playable in `core`.
///
/// Legal moves are searched before pseudo-legal captures. Text that matches
/// nothing under the position's own castling convention is retried under the
/// other one. Returns `Move::NONE` when nothing matches.
pub fn long_algebraic_to_move<C: EngineCore>(long_algebraic: &str, core: &C) -> Move {
    let normalized = normalize_promotion_case(long_algebraic);
    let legal = core.legal_moves();
    let captures = core.capture_moves();
    let primary = core.is_alt_castling();

    [primary, !primary]
        .into_iter()
        .find_map(|alt_castling| {
            legal
                .iter()
                .chain(captures.iter())
                .copied()
                .find(|m| move_to_long_algebraic(*m, alt_castling) == normalized)
        })
        .unwrap_or(Move::NONE)
}

fn normalize_promotion_case(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() == 5 {
        chars[4] = chars[4].to_ascii_lowercase();
    }
    chars.into_iter().collect()
}

fn castling_landing_square(king: Square, rook: Square) -> Square {
    let file = if rook > king { FILE_G } else { FILE_C };
    // Both coordinates come from a valid square, so this cannot fail.
    Square::from_coords(file, king.rank()).unwrap_or(rook)
}

fn promotion_to_char(piece: PieceKind) -> char {
    PROMOTION_LETTERS[piece.index()]
}
