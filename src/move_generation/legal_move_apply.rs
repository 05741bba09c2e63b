//! Turn state machine.
//!
//! `apply_move` validates a requested step against the current legal set,
//! then builds the successor state: relocation, removal of the victim
//! recorded at generation time, promotion, and either a forced continuation
//! (same side keeps the move) or a turn switch followed by win detection.

use std::fmt;

use tracing::{debug, info, warn};

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;
use crate::move_generation::capture_sequences::has_capture_from;
use crate::move_generation::legal_move_generator::{legal_moves_for, LegalMoveSet};
use crate::moves::move_descriptions::{describe_move, LastMove, LegalMove};

/// What a committed step did to the flow of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Turn passed to the opponent.
    Applied,
    /// The same piece must keep capturing; the turn did not advance.
    ContinueCapturing,
    /// The move ended the game in favour of the given side.
    GameOver(Color),
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Applied => write!(f, "Move applied"),
            MoveOutcome::ContinueCapturing => write!(f, "Capture! Continue (multi-jump, max-capture)"),
            MoveOutcome::GameOver(Color::White) => write!(f, "Move applied, white wins"),
            MoveOutcome::GameOver(Color::Black) => write!(f, "Move applied, black wins"),
        }
    }
}

/// Successor state plus a description of the committed step.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    pub state: GameState,
    pub step: LegalMove,
    pub outcome: MoveOutcome,
    pub promoted: bool,
}

/// Validates and applies one step for the side to move.
///
/// `game_state` is never modified; on success the returned [`AppliedMove`]
/// carries the successor state.
pub fn apply_move(game_state: &GameState, from: Square, to: Square) -> CheckersResult<AppliedMove> {
    validate_request(game_state, from, to)?;

    let legal = legal_moves_for(&game_state.board, game_state.turn, game_state.forced);
    let step = legal
        .find(from, to)
        .ok_or_else(|| classify_rejection(game_state, &legal, from))?;

    commit_step(game_state, step)
}

/// Builds the successor state for a step already found in the legal set.
fn commit_step(game_state: &GameState, step: LegalMove) -> CheckersResult<AppliedMove> {
    let LegalMove { from, to, .. } = step;
    let mover = game_state.turn;
    let mut next = game_state.clone();
    next.board.relocate(from, to);

    if let Some(captured) = step.captured {
        match next.board.get(captured) {
            Some(victim) if victim.color != mover => next.board.set(captured, None),
            _ => {
                warn!(%from, %to, %captured, "recorded capture square holds no opponent piece");
                return Err(CheckersError::InternalCaptureResolutionFailure { from, to, captured });
            }
        }
    }

    let promoted = next.board.promote(to);
    next.last_move = Some(LastMove { from, to });
    next.history.push(describe_move(mover, &step));

    let outcome = if step.is_capture() && has_capture_from(&next.board, to) {
        next.forced = Some(to);
        debug!(%from, %to, "multi-jump continues");
        MoveOutcome::ContinueCapturing
    } else {
        next.forced = None;
        next.turn = mover.opposite();
        next.status = evaluate_status(&next.board, next.turn);
        match next.status.winner() {
            Some(winner) => {
                info!(?winner, "game over");
                MoveOutcome::GameOver(winner)
            }
            None => MoveOutcome::Applied,
        }
    };

    debug!(%from, %to, capture = step.is_capture(), promoted, ?outcome, "move applied");
    Ok(AppliedMove {
        state: next,
        step,
        outcome,
        promoted,
    })
}

fn validate_request(game_state: &GameState, from: Square, to: Square) -> CheckersResult<()> {
    if game_state.is_over() {
        return Err(CheckersError::GameAlreadyOver);
    }
    if !from.is_on_board() || !to.is_on_board() {
        return Err(CheckersError::OutOfBounds);
    }
    if !to.is_dark() {
        return Err(CheckersError::NotDarkSquare);
    }
    let piece = game_state
        .board
        .get(from)
        .ok_or(CheckersError::NoPieceAtSource(from))?;
    if piece.color != game_state.turn {
        return Err(CheckersError::WrongSideToMove);
    }
    if game_state.board.get(to).is_some() {
        return Err(CheckersError::TargetOccupied(to));
    }
    Ok(())
}

fn classify_rejection(game_state: &GameState, legal: &LegalMoveSet, from: Square) -> CheckersError {
    match game_state.forced {
        Some(forced) if forced != from => CheckersError::MustContinueForcedPiece(forced),
        _ if legal.capture_phase => CheckersError::CaptureMandatory,
        _ => CheckersError::IllegalMove,
    }
}

/// Status with `turn` to move: a side without pieces loses, and so does a
/// side to move that has pieces but no legal move.
pub fn evaluate_status(board: &Board, turn: Color) -> GameStatus {
    if board.count(Color::White) == 0 {
        return GameStatus::WinBlack;
    }
    if board.count(Color::Black) == 0 {
        return GameStatus::WinWhite;
    }
    if legal_moves_for(board, turn, None).is_empty() {
        return GameStatus::win_for(turn.opposite());
    }
    GameStatus::Playing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_parser::parse_state;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn opening_step_is_legal_and_passes_the_turn() {
        let state = GameState::new_game();
        let applied = apply_move(&state, sq(5, 0), sq(4, 1)).expect("legal opening move");
        assert_eq!(applied.outcome, MoveOutcome::Applied);
        assert_eq!(applied.state.turn, Color::Black);
        assert_eq!(applied.state.board.get(sq(4, 1)), Some(Piece::man(Color::White)));
        assert!(applied.state.board.is_empty(sq(5, 0)));
        assert_eq!(applied.state.history, vec!["W: (5,0)->(4,1)".to_owned()]);
        assert_eq!(applied.state.last_move, Some(LastMove { from: sq(5, 0), to: sq(4, 1) }));
        // The input state is untouched.
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn man_cannot_move_two_squares() {
        let state = GameState::new_game();
        assert_eq!(
            apply_move(&state, sq(5, 0), sq(3, 2)).unwrap_err(),
            CheckersError::IllegalMove
        );
    }

    #[test]
    fn request_validation_errors() {
        let state = GameState::new_game();
        assert_eq!(apply_move(&state, sq(5, 0), sq(8, 1)).unwrap_err(), CheckersError::OutOfBounds);
        assert_eq!(apply_move(&state, sq(-1, 0), sq(4, 1)).unwrap_err(), CheckersError::OutOfBounds);
        assert_eq!(apply_move(&state, sq(5, 0), sq(4, 0)).unwrap_err(), CheckersError::NotDarkSquare);
        assert_eq!(
            apply_move(&state, sq(4, 1), sq(3, 2)).unwrap_err(),
            CheckersError::NoPieceAtSource(sq(4, 1))
        );
        assert_eq!(apply_move(&state, sq(2, 1), sq(3, 2)).unwrap_err(), CheckersError::WrongSideToMove);
        assert_eq!(
            apply_move(&state, sq(6, 1), sq(5, 2)).unwrap_err(),
            CheckersError::TargetOccupied(sq(5, 2))
        );
    }

    #[test]
    fn capture_then_forced_continuation() {
        let state = parse_state(
            "
            .......b
            ........
            ...b.b..
            ..w.....
            ........
            ........
            ........
            ........",
            Color::White,
        )
        .expect("valid state");

        let first = apply_move(&state, sq(3, 2), sq(1, 4)).expect("first jump");
        assert_eq!(first.outcome, MoveOutcome::ContinueCapturing);
        assert_eq!(first.state.forced, Some(sq(1, 4)));
        assert_eq!(first.state.turn, Color::White);
        assert!(first.state.board.is_empty(sq(2, 3)));
        assert_eq!(first.state.history, vec!["W: (3,2)->(1,4) x (2,3)".to_owned()]);

        let second = apply_move(&first.state, sq(1, 4), sq(3, 6)).expect("second jump");
        assert_eq!(second.outcome, MoveOutcome::Applied);
        assert_eq!(second.state.forced, None);
        assert_eq!(second.state.turn, Color::Black);
        assert!(second.state.board.is_empty(sq(2, 5)));
        assert_eq!(second.state.status, GameStatus::Playing);
    }

    #[test]
    fn quiet_move_rejected_while_capture_exists() {
        let state = parse_state(
            "
            ........
            ........
            ...b....
            ..w.....
            ........
            ........
            .....w..
            ........",
            Color::White,
        )
        .expect("valid state");
        assert_eq!(
            apply_move(&state, sq(6, 5), sq(5, 4)).unwrap_err(),
            CheckersError::CaptureMandatory
        );
    }

    #[test]
    fn other_piece_rejected_during_multi_jump() {
        let state = parse_state(
            "
            .......b
            ........
            ...b.b..
            ..w.....
            ........
            ........
            .....w..
            ........",
            Color::White,
        )
        .expect("valid state");
        let first = apply_move(&state, sq(3, 2), sq(1, 4)).expect("first jump");
        assert_eq!(
            apply_move(&first.state, sq(6, 5), sq(5, 4)).unwrap_err(),
            CheckersError::MustContinueForcedPiece(sq(1, 4))
        );
    }

    #[test]
    fn man_is_crowned_mid_sequence_and_keeps_capturing() {
        let state = parse_state(
            "
            ........
            ..b.....
            .w......
            ......b.
            ........
            ........
            ........
            B.......",
            Color::White,
        )
        .expect("valid state");
        let first = apply_move(&state, sq(2, 1), sq(0, 3)).expect("crowning jump");
        assert!(first.promoted);
        assert_eq!(first.state.board.get(sq(0, 3)), Some(Piece::king(Color::White)));
        assert_eq!(first.state.forced, Some(sq(0, 3)));
        assert_eq!(first.outcome, MoveOutcome::ContinueCapturing);

        let second = apply_move(&first.state, sq(0, 3), sq(4, 7)).expect("king continues");
        assert!(second.state.board.is_empty(sq(3, 6)));
        assert_eq!(second.state.turn, Color::Black);
        assert_eq!(second.state.status, GameStatus::Playing);
    }

    #[test]
    fn flying_king_capture_removes_the_recorded_victim() {
        let state = parse_state(
            "
            ........
            ........
            ........
            ........
            ...b....
            ........
            .....b..
            W.......",
            Color::White,
        )
        .expect("valid state");
        // (6,5) is off the capture line and only keeps Black in the game.
        let applied = apply_move(&state, sq(7, 0), sq(1, 6)).expect("long capture");
        assert_eq!(applied.outcome, MoveOutcome::Applied);
        assert!(applied.state.board.is_empty(sq(4, 3)));
        assert_eq!(applied.step.captured, Some(sq(4, 3)));
        assert_eq!(applied.state.board.get(sq(6, 5)), Some(Piece::man(Color::Black)));
        assert_eq!(applied.state.board.get(sq(1, 6)), Some(Piece::king(Color::White)));
    }

    #[test]
    fn capturing_the_last_piece_wins() {
        let state = parse_state(
            "
            ........
            ........
            ...b....
            ..w.....
            ........
            ........
            ........
            ........",
            Color::White,
        )
        .expect("valid state");
        let applied = apply_move(&state, sq(3, 2), sq(1, 4)).expect("winning capture");
        assert_eq!(applied.outcome, MoveOutcome::GameOver(Color::White));
        assert_eq!(applied.state.status, GameStatus::WinWhite);
        assert_eq!(
            apply_move(&applied.state, sq(1, 4), sq(0, 5)).unwrap_err(),
            CheckersError::GameAlreadyOver
        );
    }

    #[test]
    fn blocked_side_to_move_loses() {
        let state = parse_state(
            "
            .b......
            w.w.....
            ...w....
            ........
            ........
            ........
            .......w
            ........",
            Color::White,
        )
        .expect("valid state");
        assert_eq!(state.status, GameStatus::Playing);
        let applied = apply_move(&state, sq(6, 7), sq(5, 6)).expect("quiet move");
        assert_eq!(applied.state.turn, Color::Black);
        assert_eq!(applied.state.status, GameStatus::WinWhite);
        assert_eq!(applied.outcome, MoveOutcome::GameOver(Color::White));
    }

    #[test]
    fn stale_capture_square_is_an_internal_error() {
        let state = parse_state(
            "
            ........
            ........
            ...b....
            ..w.....
            ........
            ........
            ........
            ........",
            Color::White,
        )
        .expect("valid state");
        let stale = LegalMove {
            from: sq(3, 2),
            to: sq(1, 4),
            captured: Some(sq(2, 1)),
        };
        assert_eq!(
            commit_step(&state, stale).unwrap_err(),
            CheckersError::InternalCaptureResolutionFailure {
                from: sq(3, 2),
                to: sq(1, 4),
                captured: sq(2, 1),
            }
        );
    }

    #[test]
    fn evaluate_status_rules() {
        assert_eq!(evaluate_status(&Board::initial(), Color::White), GameStatus::Playing);
        assert_eq!(evaluate_status(&Board::empty(), Color::White), GameStatus::WinBlack);
    }
}
