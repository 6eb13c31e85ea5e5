//! Integration tests for the wc-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wc_core::Catalog;

fn wild_current() -> Command {
    Command::cargo_bin("wild-current").unwrap()
}

/// Write the built-in catalog to a temp file.
fn catalog_file() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, Catalog::wild_current().to_json().unwrap()).unwrap();
    (dir, path)
}

#[test]
fn check_built_in_catalog() {
    wild_current()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("Rooms"))
        .stdout(predicate::str::contains("23"));
}

#[test]
fn check_catalog_file() {
    let (_dir, path) = catalog_file();
    wild_current()
        .args(["check", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Start room: ship_deck"));
}

#[test]
fn check_rejects_broken_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "start_room": "nowhere" }"#).unwrap();
    wild_current()
        .args(["check", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown room: nowhere"));
}

#[test]
fn check_missing_file() {
    wild_current()
        .args(["check", "--catalog", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read catalog"));
}

#[test]
fn rooms_lists_every_room() {
    wild_current()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rookie Deck"))
        .stdout(predicate::str::contains("Sky Shrine"))
        .stdout(predicate::str::contains("23 rooms"));
}

#[test]
fn route_by_id() {
    wild_current()
        .args(["route", "ship_deck", "tavern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("north, north, east"))
        .stdout(predicate::str::contains("3 moves"));
}

#[test]
fn route_by_name() {
    wild_current()
        .args(["route", "Rookie Deck", "sky shrine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("north, west, north, west, north"));
}

#[test]
fn route_to_self() {
    wild_current()
        .args(["route", "dock", "dock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already are"));
}

#[test]
fn route_unknown_room() {
    wild_current()
        .args(["route", "dock", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown room: atlantis"));
}

#[test]
fn play_until_quit() {
    let dir = TempDir::new().unwrap();
    wild_current()
        .arg("play")
        .arg("--save")
        .arg(dir.path().join("save.json"))
        .write_stdin("look\ngo north\nquit\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rookie captain"))
        .stdout(predicate::str::contains("Harbor Dock - Harbor Isle"))
        .stdout(predicate::str::contains("end your tale"))
        .stdout(predicate::str::contains("The tale is over.").not());
}

#[test]
fn play_stops_at_eof() {
    let dir = TempDir::new().unwrap();
    wild_current()
        .arg("play")
        .arg("--save")
        .arg(dir.path().join("save.json"))
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your pockets are empty."));
}

#[test]
fn play_saves_to_the_given_path() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    wild_current()
        .arg("play")
        .arg("--save")
        .arg(&save)
        .write_stdin("take rope\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game saved to"));

    let json = fs::read_to_string(&save).unwrap();
    assert!(json.contains("\"rope\""));
}

#[test]
fn play_from_another_start_room() {
    let dir = TempDir::new().unwrap();
    wild_current()
        .args(["play", "--start", "tavern", "--save"])
        .arg(dir.path().join("save.json"))
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tidal Tavern - Harbor Isle"));
}

#[test]
fn play_rejects_unknown_start_room() {
    wild_current()
        .args(["play", "--start", "atlantis"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start session"));
}
