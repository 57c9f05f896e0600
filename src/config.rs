//! Startup configuration.
//!
//! Built once in `main` from the command line and handed by value to the game
//! manager. Nothing reads options from global state.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;

/// Which color the agent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// White opens the game.
    pub fn moves_first(self) -> bool {
        self == Side::White
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub side: Side,
    /// Write castling as king-to-rook instead of king-to-landing-square.
    pub alt_castling: bool,
    /// Fixed RNG seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
    pub start_fen: String,
}

impl AgentConfig {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            alt_castling: false,
            seed: None,
            start_fen: STARTING_POSITION_FEN.to_owned(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_alt_castling(mut self, alt_castling: bool) -> Self {
        self.alt_castling = alt_castling;
        self
    }

    pub fn with_start_fen(mut self, fen: impl Into<String>) -> Self {
        self.start_fen = fen.into();
        self
    }
}
