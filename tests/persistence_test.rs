//! Integration test: Save and restore
//!
//! The save file is a flat JSON object. Restoring never fails: missing or
//! damaged fields simply keep their defaults.

use serde_json::json;
use std::fs;
use typing_clicker::utils::persistence::{restore_or_default, save_best_effort, SaveStore};
use typing_clicker::GameState;

fn played_state() -> GameState {
    GameState {
        currency: 98_765,
        power_per_click_base: 12,
        power_per_second_base: 30,
        practice_level: 11,
        auto_level: 15,
        multiplier_level: 4,
        level: 17,
        xp: 123_456,
    }
}

#[test]
fn test_round_trip_reproduces_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("save.json"));

    assert!(save_best_effort(&store, &played_state()));
    let restored = restore_or_default(&store);

    assert_eq!(restored, played_state());
}

#[test]
fn test_missing_field_keeps_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut snapshot = played_state().to_snapshot();
    snapshot.remove("auto_level");
    fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    let restored = restore_or_default(&SaveStore::new(&path));

    let mut expected = played_state();
    expected.auto_level = GameState::new().auto_level;
    assert_eq!(restored, expected);
}

#[test]
fn test_missing_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("absent.json"));

    assert_eq!(restore_or_default(&store), GameState::new());
}

#[test]
fn test_legacy_save_with_typing_power() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let legacy = json!({
        "typing_power": 640,
        "power_per_click_base": 3,
        "power_per_second_base": 4,
        "practice_level": 2,
        "auto_level": 2,
        "multiplier_level": 0,
        "level": 3,
        "xp": 900
    });
    fs::write(&path, legacy.to_string()).unwrap();

    let restored = restore_or_default(&SaveStore::new(&path));

    assert_eq!(restored.currency, 640);
    assert_eq!(restored.level, 3);
    assert_eq!(restored.xp, 900);
}

#[test]
fn test_damaged_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, "{\"currency\": 10,").unwrap();

    assert_eq!(restore_or_default(&SaveStore::new(&path)), GameState::new());
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("save.json"));

    save_best_effort(&store, &played_state());
    let mut later = played_state();
    later.currency = 1;
    save_best_effort(&store, &later);

    assert_eq!(restore_or_default(&store).currency, 1);
}

#[test]
fn test_unwritable_location_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    // Parent path runs through a regular file, so directory creation fails
    let store = SaveStore::new(blocker.join("save.json"));

    assert!(!save_best_effort(&store, &played_state()));
}
