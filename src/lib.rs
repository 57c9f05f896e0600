//! Crate root module declarations for the antichess agent.
//!
//! Exposes the game state, the move-generation core, the capture-first
//! selector, the line protocol and the long-algebraic codec so the binary,
//! tests and benches share the same module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod chess_core;
    pub mod move_generator;
}

pub mod engines {
    pub mod engine_capture_random;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod command_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
}
