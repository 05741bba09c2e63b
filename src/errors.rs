//! Errors used throughout the checkers engine.
//!
//! Every rule violation is a recoverable value: callers receive a
//! `CheckersError` and turn it into a `(false, reason)` report via
//! [`CommandReport`]. Nothing in the engine aborts on a bad request.
//!
//! `InternalCaptureResolutionFailure` is the one variant that signals an
//! engine bug rather than a user mistake.

use std::fmt::Display;

use thiserror::Error;

use crate::game_state::checkers_types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    #[error("Out of bounds")]
    OutOfBounds,

    #[error("Only dark squares are playable")]
    NotDarkSquare,

    #[error("No piece at {0}")]
    NoPieceAtSource(Square),

    #[error("Not your turn")]
    WrongSideToMove,

    #[error("Target {0} is occupied")]
    TargetOccupied(Square),

    #[error("Capture is mandatory (max-capture rule)")]
    CaptureMandatory,

    /// Payload: the square of the piece that has to keep capturing.
    #[error("You must continue capturing with the piece on {0}")]
    MustContinueForcedPiece(Square),

    #[error("Illegal move")]
    IllegalMove,

    #[error("Game is over")]
    GameAlreadyOver,

    #[error("No legal moves available for the AI")]
    NoLegalMovesForAI,

    /// The captured square recorded at generation time no longer holds an
    /// opponent piece.
    #[error("Internal: capture at {captured} not found for move {from}->{to}")]
    InternalCaptureResolutionFailure {
        from: Square,
        to: Square,
        captured: Square,
    },

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Invalid board text: {0}")]
    InvalidBoardText(String),

    #[error("Unknown AI level '{0}' (expected easy, medium or hard)")]
    InvalidAiLevel(String),

    #[error("Unknown AI kind '{0}' (expected ai or bot)")]
    InvalidAiKind(String),
}

pub type CheckersResult<T> = Result<T, CheckersError>;

/// `(success, message)` pair handed to the request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    pub ok: bool,
    pub message: String,
}

impl<T: Display> From<CheckersResult<T>> for CommandReport {
    fn from(result: CheckersResult<T>) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                message: value.to_string(),
            },
            Err(err) => Self {
                ok: false,
                message: err.to_string(),
            },
        }
    }
}
