//! Read-only state snapshots for the request layer.
//!
//! Views use the client's token format: `"w"`/`"W"`/`"b"`/`"B"` pieces,
//! `"w"`/`"b"` for the side to move, `[row, col]` pairs for squares.

use serde::{Deserialize, Serialize};

use crate::game_state::checkers_rules::RULES_TAG;
use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::{LastMove, LegalMove};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveView {
    pub from: [i8; 2],
    pub to: [i8; 2],
}

impl From<LastMove> for MoveView {
    fn from(mv: LastMove) -> Self {
        Self {
            from: mv.from.to_pair(),
            to: mv.to.to_pair(),
        }
    }
}

/// One entry of a `legal_moves_from` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoveView {
    pub to: [i8; 2],
    pub capture: bool,
}

impl From<LegalMove> for LegalMoveView {
    fn from(mv: LegalMove) -> Self {
        Self {
            to: mv.to.to_pair(),
            capture: mv.is_capture(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub turn: String,
    pub board: Vec<Vec<Option<char>>>,
    pub forced: Option<[i8; 2]>,
    pub status: String,
    pub rules: String,
    pub last_move: Option<MoveView>,
    /// Most recent move texts; absent from minimal views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<String>>,
}

impl StateView {
    pub fn from_state(state: &GameState, minimal: bool, history_view_len: usize) -> Self {
        let board = state
            .board
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(Piece::token)).collect())
            .collect();

        let history = (!minimal).then(|| {
            let skip = state.history.len().saturating_sub(history_view_len);
            state.history[skip..].to_vec()
        });

        Self {
            turn: state.turn.token().to_owned(),
            board,
            forced: state.forced.map(Square::to_pair),
            status: state.status.as_str().to_owned(),
            rules: RULES_TAG.to_owned(),
            last_move: state.last_move.map(MoveView::from),
            history,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
