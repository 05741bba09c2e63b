//! One-ply heuristic engine.
//!
//! Scores each legal first step in isolation and picks according to level:
//! `Easy` chooses uniformly, `Medium` samples among the three best scores,
//! `Hard` always plays the best. Equal scores keep generation order.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{AiLevel, Engine, EngineOutput, EngineParams};
use crate::errors::CheckersResult;
use crate::game_state::checkers_rules::AI_TOP_K_MEDIUM;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::{MaxCaptureGenerator, MoveGenerator};
use crate::moves::move_descriptions::LegalMove;

const CAPTURE_BONUS: i32 = 100;
const PROMOTION_BONUS: i32 = 80;
const KING_BONUS: i32 = 10;

pub struct HeuristicEngine {
    move_generator: MaxCaptureGenerator,
    rng: StdRng,
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self {
            move_generator: MaxCaptureGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: MaxCaptureGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Static score of a single step on `board`.
///
/// Captures dominate, then crowning a man, then a centrality bonus that
/// peaks at 6 on the two middle columns, then a small bonus for moving a king.
pub fn score_move(board: &Board, mv: &LegalMove) -> i32 {
    let Some(piece) = board.get(mv.from) else {
        return 0;
    };

    let mut score = 0;
    if mv.is_capture() {
        score += CAPTURE_BONUS;
    }
    if !piece.is_king() && mv.to.row == piece.color.promotion_row() {
        score += PROMOTION_BONUS;
    }
    score += 7 - (7 - 2 * i32::from(mv.to.col)).abs();
    if piece.is_king() {
        score += KING_BONUS;
    }
    score
}

/// Moves sorted by descending score; ties keep their input order.
pub fn rank_moves(board: &Board, moves: &[LegalMove]) -> Vec<(i32, LegalMove)> {
    let mut ranked: Vec<(i32, LegalMove)> = moves
        .iter()
        .map(|mv| (score_move(board, mv), *mv))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
}

impl Engine for HeuristicEngine {
    fn name(&self) -> &str {
        "PlumCheckers Heuristic"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &EngineParams,
    ) -> CheckersResult<EngineOutput> {
        let legal = self.move_generator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "heuristic_engine level {} legal_moves {}",
            params.level,
            legal.len()
        ));

        if legal.is_empty() {
            return Ok(out);
        }

        out.best_move = match params.level {
            AiLevel::Easy => legal.moves.as_slice().choose(&mut self.rng).copied(),
            AiLevel::Medium | AiLevel::Hard => {
                let ranked = rank_moves(&game_state.board, &legal.moves);
                let top_k = if params.level == AiLevel::Hard {
                    1
                } else {
                    AI_TOP_K_MEDIUM
                };
                let top = &ranked[..top_k.min(ranked.len())];
                let picked = top.choose(&mut self.rng).copied();
                if let Some((score, mv)) = picked {
                    debug!(level = %params.level, score, from = %mv.from, to = %mv.to, "heuristic pick");
                    out.info_lines
                        .push(format!("heuristic_engine best_score {}", ranked[0].0));
                }
                picked.map(|(_, mv)| mv)
            }
        };

        Ok(out)
    }
}
