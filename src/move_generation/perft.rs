//! Perft node counting over committed steps.
//!
//! Every legal first step is one ply, so a two-capture multi-jump
//! contributes two levels of the tree. Finished games are leaves with no
//! children.

use crate::errors::CheckersResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    /// Leaf steps that left a forced multi-jump pending.
    pub continuations: usize,
    /// Leaf steps that ended the game.
    pub game_overs: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.continuations += rhs.continuations;
        self.game_overs += rhs.game_overs;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }
    if game_state.is_over() {
        return Ok(PerftCounts::default());
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state).moves {
        let applied = apply_move(game_state, mv.from, mv.to)?;

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(applied.step.is_capture());
            total.promotions += usize::from(applied.promoted);
            total.continuations +=
                usize::from(applied.outcome == MoveOutcome::ContinueCapturing);
            total.game_overs += usize::from(matches!(applied.outcome, MoveOutcome::GameOver(_)));
        } else {
            total.merge(perft(generator, &applied.state, depth - 1)?);
        }
    }

    Ok(total)
}

/// Per-root-move node counts, for narrowing down generator mismatches.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> CheckersResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    if depth == 0 || game_state.is_over() {
        return Ok(out);
    }

    for mv in generator.generate_legal_moves(game_state).moves {
        let applied = apply_move(game_state, mv.from, mv.to)?;
        let nodes = perft(generator, &applied.state, depth - 1)?.nodes;
        out.push((format!("{}->{}", mv.from, mv.to), nodes));
    }
    Ok(out)
}
