//! Core value types shared by the codec, the selector and the game manager.
//!
//! Moves are plain tagged values. Castling is always stored as "king captures
//! rook": `from` is the king square and `to` is the rook square.

use std::fmt;

use crate::errors::{AgentError, AgentResult};
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Board square, `a1 = 0` through `h8 = 63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);

    /// Build a square from an index, rejecting anything past `h8`.
    #[inline]
    pub fn new(index: u8) -> AgentResult<Self> {
        if index > 63 {
            return Err(AgentError::InvalidSquare(format!("index {index}")));
        }
        Ok(Square(index))
    }

    /// Build a square from zero-based file and rank.
    #[inline]
    pub fn from_coords(file: u8, rank: u8) -> AgentResult<Self> {
        if file > 7 || rank > 7 {
            return Err(AgentError::InvalidSquare(format!("file {file} rank {rank}")));
        }
        Ok(Square(rank * 8 + file))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Zero-based file (`a = 0`).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank (`1 = 0`).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

/// Piece kind (color is tracked by the engine core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion,
    EnPassant,
    Castling,
    /// A pass. Only used internally, never chosen by a selector.
    Null,
    /// "No move", e.g. the answer in a terminal position.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// Only meaningful when `kind == MoveKind::Promotion`.
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub const NONE: Move = Move {
        from: Square::A1,
        to: Square::A1,
        kind: MoveKind::None,
        promotion: None,
    };

    pub const NULL: Move = Move {
        from: Square::A1,
        to: Square::A1,
        kind: MoveKind::Null,
        promotion: None,
    };

    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Normal,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promotion(from: Square, to: Square, piece: PieceKind) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Promotion,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::EnPassant,
            promotion: None,
        }
    }

    /// Castling as king-captures-rook.
    #[inline]
    pub const fn castling(king: Square, rook: Square) -> Self {
        Move {
            from: king,
            to: rook,
            kind: MoveKind::Castling,
            promotion: None,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.kind == MoveKind::None
    }
}

/// Raw coordinate form; castling shows the rook square.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(*self, true))
    }
}

/// `true` when `mv` is an element of `moves`.
#[inline]
pub fn contains(moves: &[Move], mv: Move) -> bool {
    moves.contains(&mv)
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind, Square};

    #[test]
    fn square_coordinates() {
        let e4 = Square::from_coords(4, 3).expect("e4 should build");
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert!(Square::new(64).is_err());
        assert!(Square::from_coords(8, 0).is_err());
    }

    #[test]
    fn sentinels_are_distinct() {
        assert_ne!(Move::NONE, Move::NULL);
        assert!(Move::NONE.is_none());
        assert_eq!(Move::NULL.kind, MoveKind::Null);
    }

    #[test]
    fn display_shows_raw_rook_square_for_castling() {
        let e1 = Square::from_coords(4, 0).expect("e1 should build");
        let h1 = Square::from_coords(7, 0).expect("h1 should build");
        assert_eq!(Move::castling(e1, h1).to_string(), "e1h1");
        assert_eq!(Move::NONE.to_string(), "(none)");
    }
}
