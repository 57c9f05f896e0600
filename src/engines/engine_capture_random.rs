//! Mandatory-capture random engine.
//!
//! Captures must be played whenever a legal one exists; among the candidates
//! the pick is uniform. The RNG is owned by the engine and can be seeded for
//! reproducible games.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::engines::engine_trait::{Engine, EngineOutput, SelectionBranch};
use crate::game_state::chess_types::{contains, Move};

pub struct CaptureRandomEngine<R: Rng = StdRng> {
    rng: R,
}

impl CaptureRandomEngine<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed once from the wall clock.
    pub fn from_wall_clock() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        debug!(seed, "seeding capture engine from wall clock");
        Self::from_seed(seed)
    }
}

impl<R: Rng> CaptureRandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Engine for CaptureRandomEngine<R> {
    fn name(&self) -> &str {
        "mandatory-capture random"
    }

    fn choose_move(&mut self, legal_moves: &[Move], capture_moves: &[Move]) -> EngineOutput {
        let (best_move, branch) = select_move(legal_moves, capture_moves, &mut self.rng);
        debug!(
            legal = legal_moves.len(),
            captures = capture_moves.len(),
            ?branch,
            chosen = %best_move,
            "selected move"
        );
        EngineOutput { best_move, branch }
    }
}

/// Apply the mandatory-capture policy to one position's enumerations.
///
/// 1. legal captures exist: uniform pick among them;
/// 2. only non-legal captures exist: the first of them, deterministically;
/// 3. no captures: uniform pick among legal moves;
/// 4. otherwise `Move::NONE`.
pub fn select_move<R: Rng + ?Sized>(
    legal_moves: &[Move],
    capture_moves: &[Move],
    rng: &mut R,
) -> (Move, SelectionBranch) {
    let legal_captures: Vec<Move> = capture_moves
        .iter()
        .copied()
        .filter(|m| contains(legal_moves, *m))
        .collect();

    if let Some(mv) = legal_captures.choose(rng) {
        return (*mv, SelectionBranch::LegalCapture);
    }

    if let Some(first) = capture_moves.first() {
        // Playable only because the capture list is pseudo-legal; may leave our king attacked.
        warn!(
            chosen = %first,
            captures = capture_moves.len(),
            "no legal capture available, falling back to first pseudo-legal capture"
        );
        return (*first, SelectionBranch::PseudoCaptureFallback);
    }

    match legal_moves.choose(rng) {
        Some(mv) => (*mv, SelectionBranch::AnyLegal),
        None => (Move::NONE, SelectionBranch::NoMoves),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{select_move, CaptureRandomEngine};
    use crate::engines::engine_trait::{Engine, SelectionBranch};
    use crate::game_state::chess_types::{Move, Square};
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str) -> Move {
        let sq = |text: &str| -> Square { algebraic_to_square(text).expect("square should parse") };
        Move::normal(sq(from), sq(to))
    }

    #[test]
    fn legal_captures_are_mandatory() {
        let legal = [mv("e2", "e4"), mv("d4", "e5"), mv("g1", "f3"), mv("c4", "f7")];
        let captures = [mv("d4", "e5"), mv("c4", "f7"), mv("h1", "h7")];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (chosen, branch) = select_move(&legal, &captures, &mut rng);
            assert_eq!(branch, SelectionBranch::LegalCapture);
            assert!(chosen == mv("d4", "e5") || chosen == mv("c4", "f7"));
        }
    }

    #[test]
    fn single_legal_capture_is_always_chosen() {
        let legal = [mv("a2", "a3"), mv("b2", "c3"), mv("h2", "h4")];
        let captures = [mv("b2", "c3")];
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                select_move(&legal, &captures, &mut rng).0,
                mv("b2", "c3")
            );
        }
    }

    #[test]
    fn pseudo_capture_fallback_takes_first_capture() {
        let legal = [mv("e1", "f1"), mv("e1", "d1")];
        let captures = [mv("e2", "d4"), mv("e2", "f4")];
        let mut rng = StdRng::seed_from_u64(1);
        let (chosen, branch) = select_move(&legal, &captures, &mut rng);
        assert_eq!(chosen, mv("e2", "d4"));
        assert_eq!(branch, SelectionBranch::PseudoCaptureFallback);
    }

    #[test]
    fn without_captures_any_legal_move_is_picked() {
        let legal = [mv("e2", "e4"), mv("d2", "d4")];
        let mut rng = StdRng::seed_from_u64(3);
        let (chosen, branch) = select_move(&legal, &[], &mut rng);
        assert_eq!(branch, SelectionBranch::AnyLegal);
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn no_moves_yields_none_sentinel() {
        let mut rng = StdRng::seed_from_u64(3);
        let (chosen, branch) = select_move(&[], &[], &mut rng);
        assert!(chosen.is_none());
        assert_eq!(branch, SelectionBranch::NoMoves);
    }

    #[test]
    fn same_seed_same_choices() {
        let legal = [
            mv("a2", "a3"),
            mv("b2", "b3"),
            mv("c2", "c3"),
            mv("d2", "d3"),
            mv("e2", "e3"),
        ];
        let mut first = CaptureRandomEngine::from_seed(2024);
        let mut second = CaptureRandomEngine::from_seed(2024);
        for _ in 0..20 {
            assert_eq!(
                first.choose_move(&legal, &[]),
                second.choose_move(&legal, &[])
            );
        }
    }
}
