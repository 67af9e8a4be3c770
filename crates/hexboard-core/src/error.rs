//! Error types for board generation and placement.

use crate::player::Color;
use thiserror::Error;

/// A coordinate that does not address a cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("cube ({q}, {r}, {s}) is outside the board")]
    OutOfRange { q: i32, r: i32, s: i32 },

    #[error("cube ({q}, {r}, {s}) does not satisfy q + r + s = 0")]
    NotOnPlane { q: i32, r: i32, s: i32 },

    #[error("corner index out of range: {0}")]
    CornerOutOfRange(usize),
}

/// Failures of a generation or placement cycle.
///
/// None of these leave a [`Board`](crate::Board) half-updated: the previous
/// tiles and buildings stay in place whenever an operation returns `Err`.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("no number other than 6 or 8 left for a cell next to a red chit")]
    PoolExhausted,

    #[error("failed to generate tiles after {attempts} attempts")]
    RetryCeilingExceeded { attempts: usize },

    #[error("buildings need a full board, found {found} tiles")]
    TilesNotPlaced { found: usize },

    #[error("no eligible vertex left for {color:?} after {placed} buildings")]
    NoEligibleVertex { color: Color, placed: usize },

    #[error("board serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
