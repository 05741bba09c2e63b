//! Command/query surface consumed by the request layer.
//!
//! A `CheckersSession` owns one game: the current [`GameState`], its bounded
//! undo history, and the AI selectors. Callers create one per game and must
//! serialize mutating commands themselves; the session does no locking.
//! Queries borrow immutably and never change anything.

use std::fmt;

use tracing::{debug, info};

use crate::engines::engine_heuristic::HeuristicEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{AiKind, AiLevel, Engine, EngineParams};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{HISTORY_VIEW_LEN, MAX_AI_CHAIN_STEPS, UNDO_CAPACITY};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::move_descriptions::LegalMove;
use crate::utils::state_view::{LegalMoveView, StateView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub undo_capacity: usize,
    pub history_view_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            undo_capacity: UNDO_CAPACITY,
            history_view_len: HISTORY_VIEW_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoOutcome {
    /// Snapshots actually restored; may be fewer than requested.
    pub undone: usize,
}

impl fmt::Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Undone")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMoveReport {
    pub kind: AiKind,
    /// Last step the AI committed.
    pub step: LegalMove,
    pub outcome: MoveOutcome,
    /// Steps committed by this request (more than one only for `ai_turn`).
    pub plies: usize,
}

impl fmt::Display for AiMoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.tag(), self.outcome)
    }
}

pub struct CheckersSession {
    config: SessionConfig,
    state: GameState,
    undo_stack: UndoStack,
    heuristic: HeuristicEngine,
    random: RandomEngine,
}

impl Default for CheckersSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckersSession {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self::build(config, HeuristicEngine::new(), RandomEngine::new())
    }

    /// Session whose AI choices are reproducible.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::build(
            config,
            HeuristicEngine::with_seed(seed),
            RandomEngine::with_seed(seed.wrapping_add(1)),
        )
    }

    /// Session resuming from an arbitrary position, with empty undo history.
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        let mut session = Self::with_config(config);
        session.state = state;
        session
    }

    fn build(config: SessionConfig, heuristic: HeuristicEngine, random: RandomEngine) -> Self {
        Self {
            config,
            state: GameState::new_game(),
            undo_stack: UndoStack::with_capacity(config.undo_capacity),
            heuristic,
            random,
        }
    }

    /// Starts a fresh game and clears undo history.
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new_game();
        self.undo_stack.clear();
        self.heuristic.new_game();
        self.random.new_game();
        info!("new checkers game");
        &self.state
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn get_state(&self, minimal: bool) -> StateView {
        StateView::from_state(&self.state, minimal, self.config.history_view_len)
    }

    /// Legal first steps for the piece on `from`; empty for anything but a
    /// movable piece of the side to move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<LegalMoveView> {
        if !from.is_on_board() {
            return Vec::new();
        }
        legal_moves_from(&self.state, from)
            .into_iter()
            .map(LegalMoveView::from)
            .collect()
    }

    pub fn apply_move(&mut self, from: Square, to: Square) -> CheckersResult<MoveOutcome> {
        let applied = apply_move(&self.state, from, to).inspect_err(|err| {
            debug!(%from, %to, %err, "move rejected");
        })?;
        let previous = std::mem::replace(&mut self.state, applied.state);
        self.undo_stack.push(previous);
        Ok(applied.outcome)
    }

    /// Restores up to `steps` snapshots. Succeeds if at least one was restored.
    pub fn undo(&mut self, steps: usize) -> CheckersResult<UndoOutcome> {
        let mut undone = 0;
        while undone < steps {
            let Some(snapshot) = self.undo_stack.pop() else {
                break;
            };
            self.state = snapshot;
            undone += 1;
        }

        if undone == 0 {
            return Err(CheckersError::NothingToUndo);
        }
        debug!(requested = steps, undone, "undo");
        Ok(UndoOutcome { undone })
    }

    /// Lets the selected AI commit one step for the side to move.
    pub fn ai_move(&mut self, level: AiLevel, kind: AiKind) -> CheckersResult<AiMoveReport> {
        if self.state.is_over() {
            return Err(CheckersError::GameAlreadyOver);
        }

        let params = EngineParams { level };
        let output = match kind {
            AiKind::Engine => self.heuristic.choose_move(&self.state, &params)?,
            AiKind::RandomBot => self.random.choose_move(&self.state, &params)?,
        };
        let step = output.best_move.ok_or(CheckersError::NoLegalMovesForAI)?;

        let outcome = self.apply_move(step.from, step.to)?;
        debug!(?kind, %level, from = %step.from, to = %step.to, ?outcome, "ai move");
        Ok(AiMoveReport {
            kind,
            step,
            outcome,
            plies: 1,
        })
    }

    /// Like [`ai_move`](Self::ai_move), but keeps moving while the AI's own
    /// piece is forced to continue a multi-jump, up to a fixed bound.
    pub fn ai_turn(&mut self, level: AiLevel, kind: AiKind) -> CheckersResult<AiMoveReport> {
        let mut report = self.ai_move(level, kind)?;
        let mut plies = 1;
        while report.outcome == MoveOutcome::ContinueCapturing && plies < MAX_AI_CHAIN_STEPS {
            report = self.ai_move(level, kind)?;
            plies += 1;
        }
        report.plies = plies;
        Ok(report)
    }
}
