//! Error types for the statespace crate

use thiserror::Error;

/// Main error type for the statespace crate
///
/// Search exhaustion is not an error: drivers report it as `Ok(None)`.
/// Every variant here is either a rejected construction argument, a
/// violated iterator protocol, or a collaborator breaking its contract.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal max depth {depth} < 0")]
    InvalidMaxDepth { depth: i32 },

    #[error("illegal bound {bound}: bounds must be comparable numbers")]
    InvalidBound { bound: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("traversal has no further nodes")]
    TraversalExhausted,

    #[error("no node returned: next() has not been called since the last prune")]
    NoNodeReturned,

    #[error("the last returned node has already been expanded")]
    AlreadyExpanded,

    #[error("transition path has no further actions")]
    PathExhausted,

    #[error("no successors to choose from: {context}")]
    NoSuccessors { context: String },

    #[error("transition probabilities sum to {total}, expected 1 within {tolerance}")]
    InconsistentDistribution { total: f64, tolerance: f64 },

    #[error("transition probability {probability} is not a valid probability")]
    InvalidProbability { probability: f64 },

    #[error("random draw {draw} was never reached by cumulative probability mass {total}")]
    UnreachedThreshold { draw: f64, total: f64 },

    #[error("invalid move: position {position} is not available")]
    InvalidMove { position: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' in label '{label}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, label: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
