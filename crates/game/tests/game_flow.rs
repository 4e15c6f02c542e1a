//! Game Flow Integration Test
//!
//! Plays a full game through the store:
//! 1. Join the session and answer every question
//! 2. Load the portfolio and trade through the desk
//! 3. Submit the weekly challenge
//! 4. Unlock and read the leaderboard
//! 5. Read the dashboard
//!
//! The mock network keeps its default latency and 10% failure rate, seeded,
//! on tokio's paused clock.

use athlete_clock::FixedClock;
use athlete_core::{Holding, LeaderboardKind, Side};
use athlete_game::{GameConfig, GameError, GameStore, NotificationKind, QuizStep};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::Arc;

macro_rules! retry {
    ($action:expr) => {{
        loop {
            match $action.await {
                Err(e) if e.is_transient() => continue,
                other => break other,
            }
        }
    }};
}

fn store(seed: u64) -> (GameStore, FixedClock) {
    let clock = FixedClock::starting_at(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap());
    let json = format!(r#"{{ "network": {{ "seed": {} }} }}"#, seed);
    let config = GameConfig::from_json(&json).expect("config");
    let store = GameStore::from_config(config, Arc::new(clock.clone())).expect("store");
    (store, clock)
}

#[tokio::test(start_paused = true)]
async fn test_full_game() {
    let _ = env_logger::try_init();
    let (mut store, clock) = store(2025);

    // === Step 1: Session ===
    retry!(store.join_session("DEMO24", "Sam", Some("sam@example.com"))).unwrap();
    assert_eq!(store.player().unwrap().nickname, "Sam");

    let answers = ["They tend to fall", "Market-wide risk", "Hold and review"];
    for (i, answer) in answers.iter().enumerate() {
        let quiz = store.quiz().unwrap();
        assert_eq!(quiz.index(), i);
        let option = if quiz.current().unwrap().has_option(answer) {
            answer.to_string()
        } else {
            quiz.current().unwrap().options[0].clone()
        };

        retry!(store.submit_answer(&option)).unwrap();
        let step = store.next_question().unwrap();
        if i == answers.len() - 1 {
            assert_eq!(step, QuizStep::Finished);
        } else {
            assert_eq!(step, QuizStep::Question(i + 1));
        }
    }
    assert_eq!(store.quiz().unwrap().answers().len(), 3);

    // === Step 2: Portfolio ===
    let summary = retry!(store.load_portfolio()).unwrap();
    assert_eq!(summary.cash, dec!(8000));
    assert_eq!(summary.holdings, 2);

    let receipt = retry!(store.trade("AAPL", dec!(5), Side::Buy)).unwrap();
    assert_eq!(receipt.cash_after, dec!(8000) - dec!(5) * dec!(189.5));
    let aapl: Holding = receipt.holding_after.unwrap();
    assert_eq!(aapl.qty, dec!(10));
    // (5 * 180 + 5 * 189.5) / 10
    assert_eq!(aapl.avg_price, dec!(184.75));

    let receipt = retry!(store.trade("SAP", dec!(3), Side::Sell)).unwrap();
    assert!(receipt.holding_after.is_none());

    let err = retry!(store.trade("TSLA", dec!(1), Side::Sell)).unwrap_err();
    assert_eq!(err.user_message(), "Not enough holdings");

    let history = store.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].symbol, "SAP");

    // === Step 3: Challenge ===
    retry!(store.load_challenge()).unwrap();
    let action = store.challenge().unwrap().challenge().actions[1].clone();
    retry!(store.submit_challenge(&action)).unwrap();
    let again = retry!(store.submit_challenge(&action)).unwrap_err();
    assert!(matches!(again, GameError::ChallengeAlreadySubmitted(_)));

    // Reloading the same challenge keeps the decision
    retry!(store.load_challenge()).unwrap();
    assert_eq!(store.challenge().unwrap().decision(), Some(action.as_str()));

    // === Step 4: Leaderboard ===
    let locked = store.load_leaderboard(LeaderboardKind::Week).await.unwrap_err();
    assert!(matches!(locked, GameError::LeaderboardLocked));

    let invalid = store.submit_email("sam@example").await.unwrap_err();
    assert!(matches!(invalid, GameError::InvalidEmail(_)));

    retry!(store.submit_email("sam@example.com")).unwrap();
    let week = retry!(store.load_leaderboard(LeaderboardKind::Week)).unwrap();
    let overall = retry!(store.load_leaderboard(LeaderboardKind::Overall)).unwrap();
    assert_eq!(week.len(), 5);
    assert_eq!(overall[0].name, "Mia_Trades");

    // === Step 5: Dashboard ===
    let dashboard = store.dashboard().await;
    assert_eq!(dashboard.portfolio.cash, dec!(8000) - dec!(947.5) + dec!(547.2));
    assert_eq!(dashboard.portfolio.holdings, 1);
    let challenge = dashboard.challenge.unwrap();
    assert!(challenge.submitted);
    assert!(!challenge.expired);
    let quiz = dashboard.quiz.unwrap();
    assert_eq!(quiz.total, 3);
    assert!(quiz.finished);
    assert_eq!(dashboard.season.week, 7);

    // Notifications from the last actions are visible, then expire
    assert!(
        store
            .notifications()
            .iter()
            .any(|n| n.kind == NotificationKind::Success)
    );
    clock.advance(chrono::Duration::seconds(4));
    assert!(store.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failures_leave_state_unchanged() {
    let (mut store, _) = store(99);
    retry!(store.load_portfolio()).unwrap();
    let before = store.portfolio().await;

    // Keep trading until the network injects a failure
    let mut failure = None;
    for _ in 0..200 {
        match store.trade("MSFT", dec!(0.01), Side::Buy).await {
            Err(e) if e.is_transient() => {
                failure = Some(e);
                break;
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => {}
        }
    }
    let failure = failure.expect("a network failure within 200 calls");
    assert_eq!(failure.user_message(), "Network error – please try again");

    let after = store.portfolio().await;
    let fills = after.history.len() - before.history.len();
    assert_eq!(after.held_qty("MSFT"), dec!(0.01) * rust_decimal::Decimal::from(fills));

    let last = store.notifications().pop().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.message, "Network error – please try again");
}

#[tokio::test(start_paused = true)]
async fn test_expired_challenge_rejected() {
    let (mut store, clock) = store(3);
    retry!(store.load_challenge()).unwrap();

    clock.set_time(Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap());
    let action = store.challenge().unwrap().challenge().actions[0].clone();
    let err = store.submit_challenge(&action).await.unwrap_err();

    assert!(matches!(err, GameError::ChallengeExpired(_)));
    assert!(!store.challenge().unwrap().is_submitted());
    assert!(store.dashboard().await.challenge.unwrap().expired);
}

#[tokio::test(start_paused = true)]
async fn test_base_path_from_env_overrides() {
    let config = GameConfig::default()
        .with_overrides(|var| match var {
            "ATHLETE_BASE_PATH" => Some("/athlete".to_string()),
            _ => None,
        })
        .unwrap();
    assert_eq!(config.route("/app/dashboard"), "/athlete/app/dashboard");
}
