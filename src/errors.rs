//! Errors used throughout the agent.
//!
//! `AgentError` is the single error type of the crate. Protocol input never
//! produces one: malformed or illegal lines go down the unknown-command path of
//! the command loop. The variants below cover startup problems (a bad starting
//! FEN) and broken engine-core contracts, which are fatal for the process.

use thiserror::Error;

/// Unified error type for the agent.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A FEN string could not be parsed or describes an impossible position.
    ///
    /// Payload: the offending FEN and the parser diagnostic.
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Square text outside `a1..h8`.
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// A move was handed to the engine core that neither its legal nor its
    /// capture enumeration contains.
    ///
    /// Payload: the move in coordinate notation.
    #[error("move {0} is not playable in the current position")]
    IllegalMove(String),

    /// A null move was requested while the side to move is in check.
    #[error("cannot pass while in check")]
    NullMoveInCheck,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;
