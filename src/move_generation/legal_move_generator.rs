//! Legal move selection under the max-capture rule.
//!
//! Gathers capture sequences for the side to move (or only the forced piece
//! while a multi-jump is in progress), keeps the sequences with the highest
//! capture count, and exposes their first steps. Simple moves are offered
//! only when no capture exists anywhere for that side.

use tracing::warn;

use crate::game_state::checkers_types::*;
use crate::move_generation::capture_sequences::capture_sequences_from;
use crate::move_generation::simple_moves::generate_all_simple_moves;
use crate::moves::move_descriptions::{CaptureSequence, LegalMove, Move};

/// First-step moves available to the side to move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoveSet {
    /// Deduplicated by `(from, to)`, in generation order.
    pub moves: Vec<LegalMove>,
    /// True when captures exist, so every entry is a capture.
    pub capture_phase: bool,
    /// Capture count of the retained sequences; zero outside the capture phase.
    pub max_captures: usize,
}

impl LegalMoveSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn find(&self, from: Square, to: Square) -> Option<LegalMove> {
        self.moves
            .iter()
            .copied()
            .find(|mv| mv.from == from && mv.to == to)
    }

    pub fn moves_from(&self, from: Square) -> Vec<LegalMove> {
        self.moves.iter().copied().filter(|mv| mv.from == from).collect()
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> LegalMoveSet;
}

/// Max-capture generator with mandatory capture and forced continuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxCaptureGenerator;

impl MoveGenerator for MaxCaptureGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> LegalMoveSet {
        legal_moves_for(&game_state.board, game_state.turn, game_state.forced)
    }
}

/// Capture sequences available to `color`, restricted to `forced` when set.
pub fn capture_sequences_for_turn(
    board: &Board,
    color: Color,
    forced: Option<Square>,
) -> Vec<CaptureSequence> {
    if let Some(forced_sq) = forced {
        return match board.get(forced_sq) {
            Some(piece) if piece.color == color => capture_sequences_from(board, forced_sq),
            _ => Vec::new(),
        };
    }

    board
        .pieces_of(color)
        .flat_map(|(from, _)| capture_sequences_from(board, from))
        .collect()
}

/// Keeps only the sequences achieving the highest capture count.
pub fn retain_max_captures(sequences: Vec<CaptureSequence>) -> Vec<CaptureSequence> {
    let Some(max) = sequences.iter().map(CaptureSequence::len).max() else {
        return sequences;
    };
    sequences.into_iter().filter(|seq| seq.len() == max).collect()
}

/// Full candidate moves (whole sequences or simple moves) after the max-capture filter.
pub fn generate_candidate_moves(board: &Board, color: Color, forced: Option<Square>) -> Vec<Move> {
    let sequences = capture_sequences_for_turn(board, color, forced);
    if !sequences.is_empty() {
        return retain_max_captures(sequences)
            .into_iter()
            .map(Move::Capture)
            .collect();
    }

    if let Some(forced_sq) = forced {
        warn!(%forced_sq, ?color, "forced piece has no capture to continue with");
        return Vec::new();
    }

    generate_all_simple_moves(board, color)
}

pub fn legal_moves_for(board: &Board, color: Color, forced: Option<Square>) -> LegalMoveSet {
    let candidates = generate_candidate_moves(board, color, forced);
    let max_captures = candidates.iter().map(Move::capture_count).max().unwrap_or(0);

    let mut moves: Vec<LegalMove> = Vec::with_capacity(candidates.len());
    for step in candidates.iter().filter_map(Move::first_step) {
        if !moves.iter().any(|m| m.from == step.from && m.to == step.to) {
            moves.push(step);
        }
    }

    LegalMoveSet {
        moves,
        capture_phase: max_captures > 0,
        max_captures,
    }
}

/// Legal first steps for the piece on `from`; empty unless it belongs to the side to move.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<LegalMove> {
    match game_state.board.get(from) {
        Some(piece) if piece.color == game_state.turn => {
            MaxCaptureGenerator.generate_legal_moves(game_state).moves_from(from)
        }
        _ => Vec::new(),
    }
}
