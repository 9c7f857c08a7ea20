//! Integration test: Progression economy
//!
//! Exercises the update cycle through the public controller API: idle
//! accrual, level-up resolution, purchases and their effect on power.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use typing_clicker::core::progression::{calc_costs, xp_for_current_level, xp_required};
use typing_clicker::{GameState, Sentence, SentenceCorpus, SessionController, SessionEvent, UpgradeSlot};

fn new_controller(state: GameState) -> SessionController {
    let corpus = SentenceCorpus::new(vec![Sentence::new(1, "ok", "了解")]).unwrap();
    SessionController::new(state, corpus, &mut ChaCha8Rng::seed_from_u64(99))
}

/// A controller whose next idle tick grants exactly `amount`.
fn with_idle_power(amount: u64) -> SessionController {
    let mut state = GameState::new();
    state.power_per_second_base = amount;
    new_controller(state)
}

// =============================================================================
// Idle Accrual
// =============================================================================

#[test]
fn test_two_and_a_half_seconds_grant_two_ticks() {
    let mut controller = with_idle_power(7);

    controller.advance(2500);

    assert_eq!(controller.state().currency, 14);
    assert_eq!(controller.state().xp, 14);
    assert_eq!(controller.idle_remainder_ms(), 500);
}

#[test]
fn test_idle_remainder_carries_across_frames() {
    let mut controller = with_idle_power(1);

    for _ in 0..3 {
        controller.advance(333);
    }
    assert_eq!(controller.state().currency, 0);
    assert_eq!(controller.idle_remainder_ms(), 999);

    controller.advance(1);
    assert_eq!(controller.state().currency, 1);
}

#[test]
fn test_frame_drop_is_not_lost() {
    let mut controller = with_idle_power(5);

    // A 10 second stall followed by normal frames
    controller.advance(10_000);
    controller.advance(16);

    assert_eq!(controller.state().currency, 50);
    assert_eq!(controller.idle_remainder_ms(), 16);
}

#[test]
fn test_idle_ticks_use_multiplier() {
    let mut state = GameState::new();
    state.power_per_second_base = 2;
    state.multiplier_level = 2;
    let mut controller = new_controller(state);

    controller.advance(1000);

    // floor(2 * 2.25)
    assert_eq!(controller.state().currency, 4);
}

// =============================================================================
// Level-Up Resolution
// =============================================================================

#[test]
fn test_single_tick_advances_exactly_two_levels() {
    // Thresholds are cumulative: reaching level 3 means xp >= xp_required(3),
    // staying below level 4 means xp < xp_required(4)
    let mut controller = with_idle_power(xp_required(4) - 1);

    let events = controller.advance(1000);

    assert_eq!(controller.state().level, 3);
    assert_eq!(controller.state().xp, xp_required(4) - 1);
    assert!(events.contains(&SessionEvent::LeveledUp { from: 1, to: 3 }));
}

#[test]
fn test_large_gain_skips_many_levels() {
    let mut controller = with_idle_power(xp_required(20));

    controller.advance(1000);

    assert_eq!(controller.state().level, 20);
}

#[test]
fn test_level_never_decreases_after_spending() {
    let mut controller = with_idle_power(xp_required(3));
    controller.advance(1000);
    assert_eq!(controller.state().level, 3);

    controller.purchase(UpgradeSlot::Multiplier);
    controller.purchase(UpgradeSlot::Auto);

    assert_eq!(controller.state().level, 3);
    assert_eq!(controller.state().xp, xp_required(3));
    assert!(controller.state().currency < xp_required(3));
}

#[test]
fn test_view_progress_starts_at_zero_after_level_up() {
    let mut controller = with_idle_power(xp_required(2));
    controller.advance(1000);

    let view = controller.view();
    assert_eq!(view.level, 2);
    assert_eq!(view.xp, xp_for_current_level(2));
    assert_eq!(view.progress, 0.0);
    assert_eq!(view.next_level_xp, xp_required(3));
}

// =============================================================================
// Purchases
// =============================================================================

#[test]
fn test_insufficient_funds_changes_nothing() {
    let mut state = GameState::new();
    state.currency = 49;
    state.practice_level = 3;
    let mut controller = new_controller(state.clone());

    // Practice costs ceil(10 * 1.35^3) = 25, affordable; the others are not
    assert!(controller.purchase(UpgradeSlot::Auto).is_empty());
    assert!(controller.purchase(UpgradeSlot::Multiplier).is_empty());

    assert_eq!(controller.state(), &state);
}

#[test]
fn test_purchases_follow_cost_curve() {
    let mut state = GameState::new();
    state.currency = 1_000_000;
    let mut controller = new_controller(state);

    let mut spent = 0;
    for level in 0..10 {
        let expected = calc_costs(level, 0, 0).practice;
        let events = controller.purchase(UpgradeSlot::Practice);
        assert_eq!(
            events,
            vec![SessionEvent::UpgradePurchased {
                slot: UpgradeSlot::Practice,
                cost: expected,
                new_level: level + 1,
            }]
        );
        spent += expected;
    }

    assert_eq!(controller.state().currency, 1_000_000 - spent);
    assert_eq!(controller.state().power_per_click_base, 11);
    assert_eq!(controller.power_per_click(), 11);
}

#[test]
fn test_auto_upgrade_starts_idle_income() {
    let mut state = GameState::new();
    state.currency = 50;
    let mut controller = new_controller(state);

    controller.advance(1000);
    assert_eq!(controller.state().currency, 50);

    controller.purchase(UpgradeSlot::Auto);
    controller.advance(1000);

    assert_eq!(controller.state().currency, 2);
    assert_eq!(controller.power_per_second(), 2);
}

#[test]
fn test_multiplier_upgrade_scales_both_rates() {
    let mut state = GameState::new();
    state.currency = 500;
    state.power_per_click_base = 4;
    state.power_per_second_base = 4;
    let mut controller = new_controller(state);

    controller.purchase(UpgradeSlot::Multiplier);

    assert_eq!(controller.multiplier(), 1.5);
    assert_eq!(controller.power_per_click(), 6);
    assert_eq!(controller.power_per_second(), 6);
    assert_eq!(controller.state().power_per_click_base, 4);
}
