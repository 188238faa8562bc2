#![allow(dead_code)]

//! Shared helpers for integration tests.

use once_cell::sync::OnceCell;
use pandemic_sim::{MatchConfig, MatchController, PlayerId};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging for tests. Idempotent.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Proptest configuration shared by the property suites.
///
/// `PROPTEST_CASES` overrides the case count (default 64).
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..base
    }
}

/// A started standard match with `names.len()` players.
pub fn started_match(seed: u64, names: &[&str]) -> (MatchController, Vec<PlayerId>) {
    init();
    let mut game = MatchController::new(MatchConfig::new(seed)).unwrap();
    let ids = names.iter().map(|name| game.add_player(*name).unwrap()).collect();
    game.start().unwrap();
    (game, ids)
}

/// Play the active player's turn doing nothing but passing.
///
/// Discards down to the hand limit whenever needed. Returns early once the
/// match ends.
pub fn pass_turn(game: &mut MatchController) {
    let Some(player) = game.active_player() else {
        return;
    };
    if game.is_over() {
        return;
    }

    discard_to_limit(game, player);
    game.start_turn(player).unwrap();
    for _ in 0..4 {
        game.pass(player).unwrap();
    }
    game.finish_action_stage(player).unwrap();
    game.draw_cards(player, 2).unwrap();
    if game.is_over() {
        return;
    }
    game.finish_draw_stage(player).unwrap();
    game.draw_infection_cards(player).unwrap();
    if game.is_over() {
        return;
    }
    discard_to_limit(game, player);
    game.end_turn(player).unwrap();
}

/// Discard from the front of the hand until it is within the limit.
pub fn discard_to_limit(game: &mut MatchController, player: PlayerId) {
    while game.player(player).unwrap().over_hand_limit() {
        let card = game.player(player).unwrap().hand()[0].id;
        game.discard(player, card).unwrap();
    }
}
