#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"title": "Castle in the Sky", "release_date": "1986", "director": "X", "producer": "P1"},
  {"title": "Grave of the Fireflies", "release_date": "1988", "director": "Y", "producer": "P2"}
]"#;

struct Env {
    home: TempDir,
    data: std::path::PathBuf,
}

impl Env {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let data = home.path().join("movies.json");
        fs::write(&data, CATALOG).unwrap();
        Self { home, data }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("filmdex").unwrap();
        cmd.env("FILMDEX_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("FILMDEX_LOG")
            .env_remove("RUST_LOG")
            .arg("--data")
            .arg(&self.data);
        cmd
    }
}

#[test]
fn search_returns_only_matching_movies() {
    let env = Env::new();
    env.cmd()
        .args(["search", "castle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Castle in the Sky"))
        .stdout(predicate::str::contains("Grave of the Fireflies").not());
}

#[test]
fn list_sorts_by_year_descending() {
    let env = Env::new();
    let output = env
        .cmd()
        .args(["list", "--sort", "yearDesc", "--view", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let grave = stdout.find("Grave of the Fireflies").unwrap();
    let castle = stdout.find("Castle in the Sky").unwrap();
    assert!(grave < castle);
}

#[test]
fn unknown_sort_key_is_reported_not_fatal() {
    let env = Env::new();
    env.cmd()
        .args(["list", "--sort", "byRating"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown sort key 'byRating'"))
        .stdout(predicate::str::contains("Castle in the Sky"));
}

#[test]
fn producer_filter_narrows_the_result() {
    let env = Env::new();
    env.cmd()
        .args(["list", "--producer", "P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Castle in the Sky"))
        .stdout(predicate::str::contains("Grave of the Fireflies").not());
}

#[test]
fn filters_on_different_attributes_combine_by_union() {
    let env = Env::new();
    env.cmd()
        .args(["list", "--director", "X", "--filter", "producer=P2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Castle in the Sky"))
        .stdout(predicate::str::contains("Grave of the Fireflies"));
}

#[test]
fn options_lists_derived_values() {
    let env = Env::new();
    env.cmd()
        .args(["options", "producer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter by producer"))
        .stdout(predicate::str::contains("[ ] P1"))
        .stdout(predicate::str::contains("[ ] P2"));
}

#[test]
fn shell_applies_actions_in_order() {
    let env = Env::new();
    let output = env
        .cmd()
        .arg("shell")
        .write_stdin("view list\ncheck producer P1\nuncheck producer P1\nsearch fireflies\nquit\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last_block = stdout.lines().last().unwrap();
    assert!(last_block.contains("Grave of the Fireflies"));
    assert!(!last_block.contains("Castle in the Sky"));
}

#[test]
fn shell_reports_bad_lines_and_continues() {
    let env = Env::new();
    env.cmd()
        .arg("shell")
        .write_stdin("dance\ncheck studio Ghibli\nsearch castle\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown action: dance"))
        .stdout(predicate::str::contains("Unknown filter 'studio'"));
}

#[test]
fn config_round_trips_through_home() {
    let env = Env::new();
    env.cmd()
        .args(["config", "default-view", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-view = list"));

    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-view = list"))
        .stdout(predicate::str::contains("default-sort = none"));
}

#[test]
fn missing_dataset_fails_with_message() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("filmdex")
        .unwrap()
        .env("FILMDEX_HOME", home.path())
        .args(["list", "--data"])
        .arg(home.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}

#[test]
fn bundled_catalog_is_the_default() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("filmdex")
        .unwrap()
        .env("FILMDEX_HOME", home.path())
        .env("NO_COLOR", "1")
        .args(["search", "totoro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My Neighbor Totoro"));
}
