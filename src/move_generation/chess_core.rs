//! Engine core backed by `shakmaty`.
//!
//! Legal moves come straight from `shakmaty::Chess`. Captures are generated
//! here from attack tables without a legality filter, so a pinned piece or a
//! piece ignoring a check still shows up in the capture list. Promotions
//! follow the usual tactical split: every queen promotion is listed, pushes
//! included, while under-promotions are left to the legal list. Enemy kings are
//! never targeted, which keeps both kings on the board and the legal
//! generator well-defined even after an illegal capture was played.

use shakmaty::fen::Fen;
use shakmaty::{
    attacks, CastlingMode, Chess, Color as CoreColor, EnPassantMode, FromSetup,
    Move as CoreMove, Piece, Position, Role, Square as CoreSquare,
};

use crate::errors::{AgentError, AgentResult};
use crate::game_state::chess_types::{Color, Move, PieceKind, Square};
use crate::move_generation::move_generator::EngineCore;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone)]
pub struct ChessCore {
    position: Chess,
    mode: CastlingMode,
}

impl Default for ChessCore {
    fn default() -> Self {
        Self {
            position: Chess::default(),
            mode: CastlingMode::Standard,
        }
    }
}

impl ChessCore {
    pub fn from_fen(fen: &str, alt_castling: bool) -> AgentResult<Self> {
        let mut core = Self::default();
        core.set_fen(fen, alt_castling)?;
        Ok(core)
    }

    fn legal_core_moves(&self) -> Vec<CoreMove> {
        if self.position.board().king_of(self.position.turn()).is_none() {
            return Vec::new();
        }
        self.position.legal_moves().into_iter().collect()
    }

    fn pseudo_legal_captures(&self) -> Vec<CoreMove> {
        let board = self.position.board();
        let us = self.position.turn();
        let occupied = board.occupied();
        let targets = board.by_color(us.other()) & !board.kings();
        let promotion_rank = us.other().backrank();

        let mut captures = Vec::with_capacity(32);
        for from in board.by_color(us) {
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            for to in attacks::attacks(from, piece, occupied) & targets {
                let promotion = (piece.role == Role::Pawn && to.rank() == promotion_rank)
                    .then_some(Role::Queen);
                captures.push(CoreMove::Normal {
                    role: piece.role,
                    from,
                    capture: board.role_at(to),
                    to,
                    promotion,
                });
            }

            // Queen pushes onto the back rank count as captures; under-promotions do not.
            if piece.role == Role::Pawn {
                let push = from
                    .offset(us.fold_wb(8, -8))
                    .filter(|to| to.rank() == promotion_rank && !occupied.contains(*to));
                if let Some(to) = push {
                    captures.push(CoreMove::Normal {
                        role: Role::Pawn,
                        from,
                        capture: None,
                        to,
                        promotion: Some(Role::Queen),
                    });
                }
            }
        }

        if let Some(ep) = self.position.maybe_ep_square() {
            let pawns = board.by_piece(Piece {
                color: us,
                role: Role::Pawn,
            });
            for from in attacks::pawn_attacks(us.other(), ep) & pawns {
                captures.push(CoreMove::EnPassant { from, to: ep });
            }
        }

        captures
    }

    /// Find the core representation of `mv` among everything this position can play.
    fn resolve(&self, mv: Move) -> Option<CoreMove> {
        self.legal_core_moves()
            .into_iter()
            .chain(self.pseudo_legal_captures())
            .find(|candidate| from_core_move(*candidate) == Some(mv))
    }
}

impl EngineCore for ChessCore {
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_core_moves()
            .into_iter()
            .filter_map(from_core_move)
            .collect()
    }

    fn capture_moves(&self) -> Vec<Move> {
        self.pseudo_legal_captures()
            .into_iter()
            .filter_map(from_core_move)
            .collect()
    }

    fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    fn set_fen(&mut self, fen: &str, alt_castling: bool) -> AgentResult<()> {
        let invalid = |reason: String| AgentError::InvalidFen {
            fen: fen.to_owned(),
            reason,
        };
        let mode = if alt_castling {
            CastlingMode::Chess960
        } else {
            CastlingMode::Standard
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let position = Chess::from_setup(parsed.into_setup(), mode)
            .map_err(|e| invalid(format!("{e}")))?;

        self.position = position;
        self.mode = mode;
        Ok(())
    }

    fn apply_move(&mut self, mv: Move) -> AgentResult<()> {
        if mv == Move::NULL {
            if self.position.is_check() {
                return Err(AgentError::NullMoveInCheck);
            }
            let fen = self.fen();
            self.position = self
                .position
                .clone()
                .swap_turn()
                .map_err(|e| AgentError::InvalidFen {
                    fen,
                    reason: format!("{e}"),
                })?;
            return Ok(());
        }

        let core_move = self
            .resolve(mv)
            .ok_or_else(|| AgentError::IllegalMove(move_to_long_algebraic(mv, true)))?;
        self.position.play_unchecked(core_move);
        Ok(())
    }

    fn is_alt_castling(&self) -> bool {
        self.mode == CastlingMode::Chess960
    }

    fn side_to_move(&self) -> Color {
        match self.position.turn() {
            CoreColor::White => Color::White,
            CoreColor::Black => Color::Black,
        }
    }

    fn ply(&self) -> u32 {
        let completed = (self.position.fullmoves().get() - 1).saturating_mul(2);
        match self.position.turn() {
            CoreColor::White => completed,
            CoreColor::Black => completed.saturating_add(1),
        }
    }
}

fn from_core_square(square: CoreSquare) -> Option<Square> {
    Square::new(u8::from(square)).ok()
}

fn from_core_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn from_core_move(mv: CoreMove) -> Option<Move> {
    match mv {
        CoreMove::Normal {
            from,
            to,
            promotion: None,
            ..
        } => Some(Move::normal(from_core_square(from)?, from_core_square(to)?)),
        CoreMove::Normal {
            from,
            to,
            promotion: Some(role),
            ..
        } => Some(Move::promotion(
            from_core_square(from)?,
            from_core_square(to)?,
            from_core_role(role),
        )),
        CoreMove::EnPassant { from, to } => Some(Move::en_passant(
            from_core_square(from)?,
            from_core_square(to)?,
        )),
        CoreMove::Castle { king, rook } => Some(Move::castling(
            from_core_square(king)?,
            from_core_square(rook)?,
        )),
        CoreMove::Put { .. } => None,
    }
}
