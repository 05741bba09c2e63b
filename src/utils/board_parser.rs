//! Text-to-Board parser.
//!
//! Reads eight rows of eight cells, top row first: `.` for an empty square,
//! `w`/`b` for men and `W`/`B` for kings. Blank lines and whitespace inside
//! a row are ignored, so positions can be written as indented literals.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

pub fn parse_board(text: &str) -> CheckersResult<Board> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    if rows.len() != BOARD_SIZE as usize {
        return Err(CheckersError::InvalidBoardText(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != BOARD_SIZE as usize {
            return Err(CheckersError::InvalidBoardText(format!(
                "row {row} has {} cells, expected {BOARD_SIZE}",
                cells.len()
            )));
        }

        for (col, &ch) in cells.iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = Piece::from_token(ch).ok_or_else(|| {
                CheckersError::InvalidBoardText(format!("unknown cell '{ch}' at ({row},{col})"))
            })?;
            let sq = Square::new(row as i8, col as i8);
            if !sq.is_dark() {
                return Err(CheckersError::InvalidBoardText(format!(
                    "piece on light square {sq}"
                )));
            }
            board.set(sq, Some(piece));
        }
    }

    Ok(board)
}

/// Parses a board and wraps it in a playing-or-decided state with `turn` to move.
pub fn parse_state(text: &str, turn: Color) -> CheckersResult<GameState> {
    Ok(GameState::from_board(parse_board(text)?, turn))
}
