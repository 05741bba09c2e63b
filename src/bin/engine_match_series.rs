//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --level hard`
//!
//! Set `RUST_LOG=plum_checkers=debug` for per-ply logs.

use chrono::Local;
use tracing_subscriber::EnvFilter;

use plum_checkers::engines::engine_heuristic::HeuristicEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::{AiLevel, Engine, EngineParams};
use plum_checkers::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use plum_checkers::utils::state_view::StateView;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let level = args
        .iter()
        .position(|a| a == "--level")
        .and_then(|idx| args.get(idx + 1))
        .map(|value| AiLevel::parse_or_default(value))
        .unwrap_or(AiLevel::Hard);
    let games = args
        .iter()
        .position(|a| a == "--games")
        .and_then(|idx| args.get(idx + 1))
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(10);

    // Heuristic engine at the chosen level against the random bot.
    let player1 = |seed| Box::new(HeuristicEngine::with_seed(seed)) as Box<dyn Engine>;
    let player2 = |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>;

    let params = EngineParams { level };
    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 300,
                white_params: params,
                black_params: params,
            },
            verbose,
        },
    )
    .map_err(|e| e.to_string())?;

    println!(
        "engine_match_series {} level={level}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);

    if let Some(final_state) = &stats.last_final_state {
        let view = StateView::from_state(final_state, true, 0);
        println!("final: {}", view.to_json().map_err(|e| e.to_string())?);
    }
    Ok(())
}
