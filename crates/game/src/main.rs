use athlete_clock::SystemClock;
use athlete_core::{LeaderboardKind, Side};
use athlete_game::{GameConfig, GameError, GameStore, QuizStep, standings};
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Attempts per action before the demo gives up on injected failures
const MAX_ATTEMPTS: usize = 5;

const DEMO_CODE: &str = "DEMO24";
const DEMO_NICKNAME: &str = "demo_player";
const DEMO_EMAIL: &str = "demo@example.com";

fn print_help() {
    eprintln!(
        r#"Athlete Game - walks through a full demo game against the mock API

USAGE:
    athlete-game [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --seed <N>          Seed the mock network for a reproducible run
    --help              Print this help message

ENVIRONMENT VARIABLES:
    ATHLETE_BASE_PATH   Base path the app is served under (default: /)
    ATHLETE_SEED        Seed for the mock network
    ATHLETE_ERROR_RATE  Failure probability of mock calls (default: 0.1)
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run with defaults
    athlete-game

    # Reproducible run without injected failures
    ATHLETE_ERROR_RATE=0 athlete-game --seed 7
"#
    );
}

/// Run an action until it succeeds or fails for a non-network reason
macro_rules! retry {
    ($action:expr) => {{
        let mut attempt = 1;
        loop {
            match $action.await {
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    warn!("Attempt {} failed: {}, retrying", attempt, e.user_message());
                    attempt += 1;
                }
                other => break other,
            }
        }
    }};
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--seed" | "-s" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) => seed = Some(n),
                    None => {
                        eprintln!("Error: --seed requires a number");
                        std::process::exit(1);
                    }
                }
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            GameConfig::from_file(&path)?
        }
        None => {
            info!("Using default configuration");
            GameConfig::default()
        }
    };
    let mut config = config.with_env_overrides()?;
    if seed.is_some() {
        config.network.seed = seed;
    }

    info!("Serving under {}", config.base_path);
    let mut store = GameStore::from_config(config, Arc::new(SystemClock::new()))?;

    run_demo(&mut store).await?;
    Ok(())
}

async fn run_demo(store: &mut GameStore) -> Result<(), GameError> {
    // === Session ===
    info!("Route: {}", store.config().route(&format!("session/{}", DEMO_CODE)));
    retry!(store.join_session(DEMO_CODE, DEMO_NICKNAME, None))?;
    if let Some(countdown) = store.countdown() {
        info!("Start in {}", countdown.display(store.now()));
    }

    loop {
        let Some(question) = store.quiz().and_then(|q| q.current()).cloned() else {
            break;
        };
        let Some(option) = question.options.first().cloned() else {
            break;
        };
        info!("{}: answering {:?}", question.title, option);

        let correct = retry!(store.submit_answer(&option))?;
        info!("Correct: {}", correct);
        if let Some(explanation) = &question.explanation {
            info!("  {}", explanation);
        }

        if store.next_question()? == QuizStep::Finished {
            break;
        }
    }

    // === Portfolio ===
    let summary = retry!(store.load_portfolio())?;
    info!(
        "Portfolio: cash={} value={} pnl={} ({}%)",
        summary.cash, summary.market_value, summary.pnl, summary.pnl_percent
    );
    for asset in store.assets() {
        let trend = if asset.is_up() { "up" } else { "down" };
        info!("  {} {} ({}% {})", asset.symbol, asset.price, asset.change, trend);
    }

    match retry!(store.trade("NVDA", Decimal::from(2), Side::Buy)) {
        Ok(receipt) => info!("Bought: {} -> cash {}", receipt.trade.id, receipt.cash_after),
        Err(e) => warn!("Buy failed: {}", e.user_message()),
    }
    match retry!(store.trade("SAP", Decimal::from(1), Side::Sell)) {
        Ok(receipt) => info!("Sold: {} -> cash {}", receipt.trade.id, receipt.cash_after),
        Err(e) => warn!("Sell failed: {}", e.user_message()),
    }
    for trade in store.history().await {
        info!("  {} {} {} @ {}", trade.side, trade.qty, trade.symbol, trade.price);
    }

    // === Challenge ===
    retry!(store.load_challenge())?;
    let action = store
        .challenge()
        .and_then(|state| state.challenge().actions.first().cloned());
    if let Some(action) = action {
        match retry!(store.submit_challenge(&action)) {
            Ok(()) => info!("Challenge decision: {}", action),
            Err(e) => warn!("Challenge not submitted: {}", e.user_message()),
        }
    }

    // === Leaderboard ===
    retry!(store.submit_email(DEMO_EMAIL))?;
    for kind in [LeaderboardKind::Week, LeaderboardKind::Overall] {
        let entries = retry!(store.load_leaderboard(kind))?;
        info!("Leaderboard ({})", kind);
        for row in standings(&entries) {
            info!(
                "  #{} {} score={} level={}{}",
                row.entry.rank,
                row.entry.name,
                row.entry.score,
                row.level,
                if row.podium { " [top 3]" } else { "" }
            );
        }
    }

    // === Messages ===
    for message in retry!(store.load_messages())? {
        let state = if message.is_sent() { "sent" } else { "scheduled" };
        info!("Message {} ({}): {}", message.scheduled, state, message.title);
    }

    // === Dashboard ===
    let dashboard = store.dashboard().await;
    info!(
        "Week {} of {}: net worth {}",
        dashboard.season.week, dashboard.season.total_weeks, dashboard.portfolio.net_worth
    );
    if let Some(quiz) = dashboard.quiz {
        info!("Quiz: {}/{} correct", quiz.correct, quiz.total);
    }
    if let Some(challenge) = dashboard.challenge {
        info!("Challenge {}: submitted={}", challenge.title, challenge.submitted);
    }

    Ok(())
}
