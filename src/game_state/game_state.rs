//! Authoritative game state of the agent.
//!
//! `GameState` owns the current position, the snapshot arena and the move
//! selector. Every mutation goes through `push_and_apply`, which records a
//! snapshot before the board changes. When an opponent move arrives the
//! history is discarded first, keeping the arena at a bounded size.

use tracing::{debug, info};

use crate::config::AgentConfig;
use crate::engines::engine_capture_random::CaptureRandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::AgentResult;
use crate::game_state::chess_types::Move;
use crate::game_state::undo_state::StateList;
use crate::move_generation::chess_core::ChessCore;
use crate::move_generation::move_generator::EngineCore;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// The game as played by the command loop: shakmaty core, mandatory-capture engine.
pub type AgentGame = GameState<ChessCore, CaptureRandomEngine>;

pub struct GameState<C: EngineCore, E: Engine> {
    position: C,
    states: StateList<C>,
    active_state: usize,
    engine: E,
    alt_castling: bool,
}

impl AgentGame {
    pub fn from_config(config: &AgentConfig) -> AgentResult<Self> {
        let position = ChessCore::from_fen(&config.start_fen, config.alt_castling)?;
        let engine = match config.seed {
            Some(seed) => CaptureRandomEngine::from_seed(seed),
            None => CaptureRandomEngine::from_wall_clock(),
        };
        info!(
            engine = engine.name(),
            fen = %config.start_fen,
            alt_castling = config.alt_castling,
            side = ?config.side,
            "game initialized"
        );
        Ok(Self::new(position, engine, config.alt_castling))
    }
}

impl<C: EngineCore, E: Engine> GameState<C, E> {
    pub fn new(position: C, engine: E, alt_castling: bool) -> Self {
        Self {
            position,
            states: StateList::default(),
            active_state: 0,
            engine,
            alt_castling,
        }
    }

    /// Replace the position from FEN and start a fresh single-snapshot history.
    pub fn initialize(&mut self, fen: &str, alt_castling: bool) -> AgentResult<()> {
        self.position.set_fen(fen, alt_castling)?;
        self.alt_castling = alt_castling;
        self.active_state = self.states.reset();
        Ok(())
    }

    /// Choose and play the agent's first move. Returns `Move::NONE` if there is nothing to play.
    pub fn play_opening_move(&mut self) -> AgentResult<Move> {
        let reply = self.choose_reply();
        if !reply.best_move.is_none() {
            self.push_and_apply(reply.best_move)?;
        }
        Ok(reply.best_move)
    }

    /// Play the opponent's move, then choose and play the agent's answer.
    ///
    /// History is reset before anything is applied, so afterwards the arena
    /// holds the root plus one snapshot per applied ply. A `Move::NONE` answer
    /// (terminal position) is returned without being applied.
    pub fn apply_opponent_then_counter(&mut self, opponent_move: Move) -> AgentResult<Move> {
        self.reset_history();
        self.push_and_apply(opponent_move)?;

        let reply = self.choose_reply();
        if reply.best_move.is_none() {
            info!(fen = %self.position.fen(), "no reply available, terminal position");
            return Ok(Move::NONE);
        }
        self.push_and_apply(reply.best_move)?;
        Ok(reply.best_move)
    }

    pub fn choose_reply(&mut self) -> EngineOutput {
        let legal = self.position.legal_moves();
        let captures = self.position.capture_moves();
        self.engine.choose_move(&legal, &captures)
    }

    /// Discard the undo history; the current board becomes the new root.
    pub fn reset_history(&mut self) {
        self.active_state = self.states.reset();
    }

    /// Take back the most recent ply. Returns `None` at the root.
    pub fn undo_last(&mut self) -> Option<Move> {
        let state = self.states.pop()?;
        if let Some(previous) = state.position_before {
            self.position = previous;
        }
        self.active_state = self.states.last_index();
        Some(state.mv)
    }

    pub fn encode(&self, mv: Move) -> String {
        move_to_long_algebraic(mv, self.alt_castling)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Snapshots appended since the last reset, i.e. without the root.
    pub fn plies_since_reset(&self) -> usize {
        self.states.len() - 1
    }

    pub fn active_state(&self) -> usize {
        self.active_state
    }

    pub fn current_fen(&self) -> String {
        self.position.fen()
    }

    pub fn position(&self) -> &C {
        &self.position
    }

    pub fn alt_castling(&self) -> bool {
        self.alt_castling
    }

    fn push_and_apply(&mut self, mv: Move) -> AgentResult<()> {
        let before = self.position.clone();
        self.position.apply_move(mv)?;
        self.active_state = self.states.push(mv, before);
        debug!(
            mv = %self.encode(mv),
            ply = self.position.ply(),
            to_move = ?self.position.side_to_move(),
            states = self.states.len(),
            "applied move"
        );
        Ok(())
    }
}
