//! Integration tests for the cn-find binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ROUTES: &str = "\
id,start_location,end_location,distance_m,accessible
1,Gate,Lib,100,true
2,Lib,Cafe,50,true
3,Gate,Admin,80,false
4,Admin,Cafe,60,true
5,Lib,Attic,,true
";

fn routes_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("routes.csv");
    fs::write(&path, ROUTES).unwrap();
    path
}

fn cn_find(routes: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cn-find").unwrap();
    cmd.env_remove("CN_CONFIG").env_remove("RUST_LOG").arg("--routes").arg(routes);
    cmd
}

#[test]
fn find_prints_route() {
    let dir = TempDir::new().unwrap();
    cn_find(&routes_file(&dir))
        .args(["find", "--from", "Gate", "--to", "Cafe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route Found: Gate to Cafe"))
        .stdout(predicate::str::contains("Gate → Admin → Cafe"))
        .stdout(predicate::str::contains("140 meters"))
        .stdout(predicate::str::contains("Partially Accessible"));
}

#[test]
fn accessible_filter_rejects_shortest() {
    let dir = TempDir::new().unwrap();
    cn_find(&routes_file(&dir))
        .args(["find", "--from", "Gate", "--to", "Cafe", "--accessible"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No fully accessible route found."));
}

#[test]
fn constrained_policy_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nav.toml");
    fs::write(&config, "accessibility_policy = \"constrained_search\"\n").unwrap();

    cn_find(&routes_file(&dir))
        .arg("--config")
        .arg(&config)
        .args(["find", "--from", "Gate", "--to", "Cafe", "--accessible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate → Lib → Cafe"))
        .stdout(predicate::str::contains("Fully Accessible"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nav.toml");
    fs::write(&config, "walking_speed_mps = 0\n").unwrap();

    cn_find(&routes_file(&dir))
        .arg("--config")
        .arg(&config)
        .args(["find", "--from", "Gate", "--to", "Cafe"])
        .assert()
        .failure();
}

#[test]
fn missing_selection_and_same_location() {
    let dir = TempDir::new().unwrap();
    let routes = routes_file(&dir);
    cn_find(&routes)
        .args(["find", "--from", "Gate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please select both starting point and destination"));
    cn_find(&routes)
        .args(["find", "--from", "Lib", "--to", "Lib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot be the same location"));
}

#[test]
fn json_outcome_is_tagged() {
    let dir = TempDir::new().unwrap();
    let out = cn_find(&routes_file(&dir))
        .args(["find", "--from", "Gate", "--to", "Museum", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["outcome"]["status"], "no_route");
    assert_eq!(
        v["message"],
        "No route found between Gate and Museum. Please check if both locations exist."
    );
}

#[test]
fn batch_answers_in_order() {
    let dir = TempDir::new().unwrap();
    let queries = dir.path().join("queries.json");
    fs::write(
        &queries,
        r#"[
            { "origin": "Gate", "destination": "Lib" },
            { "origin": "Gate", "destination": "Gate" },
            { "destination": "Lib" }
        ]"#,
    )
    .unwrap();

    let out = cn_find(&routes_file(&dir)).arg("batch").arg(&queries).arg("--json").output().unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let statuses: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["outcome"]["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["found", "same_location", "missing_selection"]);
}

#[test]
fn locations_include_unusable_rows() {
    let dir = TempDir::new().unwrap();
    cn_find(&routes_file(&dir))
        .arg("locations")
        .assert()
        .success()
        .stdout("Admin\nAttic\nCafe\nGate\nLib\n");
}

#[test]
fn location_without_usable_segment_has_no_route() {
    let dir = TempDir::new().unwrap();
    cn_find(&routes_file(&dir))
        .args(["find", "--from", "Lib", "--to", "Attic"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No route found between Lib and Attic."));
}

#[test]
fn stats_count_unusable_rows() {
    let dir = TempDir::new().unwrap();
    cn_find(&routes_file(&dir))
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Routes:      5"))
        .stdout(predicate::str::contains("Accessible Routes: 4"))
        .stdout(predicate::str::contains("Total Distance:    290 m"))
        .stdout(predicate::str::contains("Unusable Rows:     1"));
}

#[test]
fn missing_route_file_is_no_route() {
    let dir = TempDir::new().unwrap();
    cn_find(&dir.path().join("absent.csv"))
        .args(["find", "--from", "Gate", "--to", "Cafe"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No route found between Gate and Cafe."));
}
