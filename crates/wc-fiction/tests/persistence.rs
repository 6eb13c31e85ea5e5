//! Integration tests: persistence.
use std::fs;
use std::path::Path;

use wc_core::{Catalog, Flag};
use wc_fiction::save::{load_from, snapshot};
use wc_fiction::{GameSession, SessionConfig};
use wc_mechanics::FixedRoller;

fn session_saving_to(path: &Path) -> GameSession {
    let config = SessionConfig::default().with_save_path(path);
    GameSession::with_roller(Catalog::wild_current(), config, Box::new(FixedRoller::new())).unwrap()
}

#[test]
fn save_then_load_reproduces_mechanical_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let mut game = session_saving_to(&path);

    game.process("take rope");
    game.process("north");
    game.process("east");
    game.process("buy spice");
    {
        let state = game.state_mut();
        state.flags.set(Flag::Bribed);
        state.wanted = 2;
        state.morale = 4;
    }
    let before = snapshot(game.state());
    game.process("save");
    assert_eq!(load_from(&path).unwrap(), before);

    game.process("drop rope");
    game.process("west");
    game.state_mut().wanted = 5;

    let lines = game.process("load");
    assert_eq!(lines[0], "Game loaded.");
    assert!(lines[1].starts_with("Market Lane"));
    assert_eq!(snapshot(game.state()), before);
}

#[test]
fn corrupt_file_leaves_the_game_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let mut game = session_saving_to(&path);
    game.process("take flare");
    let before = snapshot(game.state());

    fs::write(&path, "{\"player\": 12}").unwrap();
    assert_eq!(game.process("load"), vec!["Save file corrupted."]);
    assert_eq!(snapshot(game.state()), before);
}

#[test]
fn foreign_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let mut game = session_saving_to(&path);
    game.process("save");

    let json = fs::read_to_string(&path).unwrap();
    fs::write(&path, json.replace("\"ship_deck\"", "\"ghost_ship\"")).unwrap();

    assert_eq!(game.process("load"), vec!["Save file corrupted."]);
    assert_eq!(game.state().player.location, "ship_deck");
}

#[test]
fn unwritable_path_reports_a_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("save.json");
    let mut game = session_saving_to(&path);
    assert_eq!(game.process("save"), vec!["Could not write save file."]);
}

#[test]
fn save_and_load_are_refused_in_combat() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let mut game = session_saving_to(&path);
    game.state_mut().player.location = "reef_shallows".to_string();
    // Miss; the beast neither flees nor connects.
    game.process("attack reef beast");
    assert!(game.state().in_combat());

    assert_eq!(game.process("save"), vec!["You're locked in combat!"]);
    assert!(!path.exists());
}
