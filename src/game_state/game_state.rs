//! Authoritative game state.
//!
//! `GameState` is a plain value: the turn state machine takes one by
//! reference and returns the successor, and sessions own exactly one of them.

use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::evaluate_status;
use crate::moves::move_descriptions::LastMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    /// Piece that must keep capturing before anything else may move.
    pub forced: Option<Square>,
    pub status: GameStatus,
    pub last_move: Option<LastMove>,
    /// Full move log; views expose only the most recent entries.
    pub history: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
            forced: None,
            status: GameStatus::Playing,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Arbitrary position with `turn` to move; status is derived from the board.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut state = Self {
            board,
            turn,
            forced: None,
            status: GameStatus::Playing,
            last_move: None,
            history: Vec::new(),
        };
        state.status = evaluate_status(&state.board, state.turn);
        state
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        !self.status.is_playing()
    }
}
