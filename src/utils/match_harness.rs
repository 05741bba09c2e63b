//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through the same
//! `apply_move` path sessions use, alternating colours across a series.

use std::time::Instant;

use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, EngineParams};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub white_params: EngineParams,
    pub black_params: EngineParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            white_params: EngineParams::default(),
            black_params: EngineParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub white_engine: String,
    pub black_engine: String,
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub plies: u16,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub total_plies: u32,
    pub last_final_state: Option<GameState>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            f64::from(self.total_plies) / f64::from(self.games)
        };
        format!(
            "games={} player1_wins={} player2_wins={} draws={} avg_plies={:.1}",
            self.games, self.player1_wins, self.player2_wins, self.draws, avg_plies
        )
    }
}

/// Plays one game from `start_state`; `engine_white` moves for White.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_state: GameState,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();
    let white_engine = engine_white.name().to_owned();
    let black_engine = engine_black.name().to_owned();
    debug!(%white_engine, %black_engine, "match start");

    let mut state = start_state;
    let mut plies = 0u16;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    while plies < config.max_plies {
        if let Some(winner) = state.status.winner() {
            return Ok(MatchResult {
                white_engine,
                black_engine,
                outcome: match winner {
                    Color::White => MatchOutcome::WhiteWin,
                    Color::Black => MatchOutcome::BlackWin,
                },
                final_state: state,
                plies,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let started = Instant::now();
        let output = match state.turn {
            Color::White => engine_white.choose_move(&state, &config.white_params)?,
            Color::Black => engine_black.choose_move(&state, &config.black_params)?,
        };
        let elapsed = started.elapsed().as_nanos();
        match state.turn {
            Color::White => white_total_time_ns += elapsed,
            Color::Black => black_total_time_ns += elapsed,
        }

        let mv = output.best_move.ok_or(CheckersError::NoLegalMovesForAI)?;
        state = apply_move(&state, mv.from, mv.to)?.state;
        plies += 1;
        debug!(ply = plies, from = %mv.from, to = %mv.to, "match ply");
    }

    let outcome = match state.status.winner() {
        Some(Color::White) => MatchOutcome::WhiteWin,
        Some(Color::Black) => MatchOutcome::BlackWin,
        None => MatchOutcome::DrawMaxPlies,
    };
    Ok(MatchResult {
        white_engine,
        black_engine,
        outcome,
        final_state: state,
        plies,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Plays `config.games` games, giving player 1 White in even-numbered games.
///
/// Factories receive a per-game seed so the whole series is reproducible.
pub fn play_engine_match_series<F1, F2>(
    player1: F1,
    player2: F2,
    config: MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::default();

    for game_idx in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game_idx) * 2);
        let mut p1 = player1(seed);
        let mut p2 = player2(seed.wrapping_add(1));
        let player1_is_white = game_idx % 2 == 0;

        let result = if player1_is_white {
            play_engine_match(p1.as_mut(), p2.as_mut(), GameState::new_game(), &config.per_game)?
        } else {
            play_engine_match(p2.as_mut(), p1.as_mut(), GameState::new_game(), &config.per_game)?
        };

        let series_outcome = match result.outcome {
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
            MatchOutcome::WhiteWin | MatchOutcome::BlackWin => {
                let color = if result.outcome == MatchOutcome::WhiteWin {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
        };

        if config.verbose {
            info!(
                game = game_idx + 1,
                white = %result.white_engine,
                black = %result.black_engine,
                plies = result.plies,
                outcome = ?series_outcome,
                "game finished\n{}",
                render_game_state(&result.final_state)
            );
        }

        stats.games += 1;
        stats.total_plies += u32::from(result.plies);
        stats.outcomes.push(series_outcome);
        stats.last_final_state = Some(result.final_state);
    }

    Ok(stats)
}
