//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the match
//! series binary. Light squares are blank, empty dark squares are `·`.

use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(&game_state.board);
    out.push('\n');
    out.push_str(&format!(
        "turn: {}  status: {}",
        game_state.turn.token(),
        game_state.status.as_str()
    ));
    if let Some(forced) = game_state.forced {
        out.push_str(&format!("  forced: {forced}"));
    }
    out
}

/// Row indices down the left, column indices across the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');
        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            let cell = match board.get(sq) {
                Some(piece) => piece.token(),
                None if sq.is_dark() => '·',
                None => ' ',
            };
            out.push(cell);
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        if row < BOARD_SIZE - 1 {
            out.push('\n');
        }
    }

    out
}
