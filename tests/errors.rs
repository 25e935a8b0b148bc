use assert_cmd::prelude::*;
use predicates::str::contains;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const BIN: &str = "alien_invasion";

/// Run the simulation on `map_text` and check it fails without a result file
fn rejects(map_text: &str, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let map = dir.path().join("bad.map");
    fs::write(&map, map_text)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(&map).args(["2", "--seed", "1"]);
    cmd.assert().failure().code(1).stderr(contains(message));

    assert!(!dir.path().join("bad.map.result").exists());
    Ok(())
}

#[test]
fn inconsistent_road() -> Result<(), Box<dyn std::error::Error>> {
    rejects("A east=B\nB west=C\nC\n", "conflicts with B west=C")
}

#[test]
fn self_reference() -> Result<(), Box<dyn std::error::Error>> {
    rejects("A east=A\n", "declares a road to itself")
}

#[test]
fn duplicate_city() -> Result<(), Box<dyn std::error::Error>> {
    rejects("A\nA\n", "duplicate city definition 'A'")
}

#[test]
fn unknown_direction() -> Result<(), Box<dyn std::error::Error>> {
    rejects("A up=B\nB\n", "unknown cardinal direction 'up'")
}

#[test]
fn unknown_city() -> Result<(), Box<dyn std::error::Error>> {
    rejects("A east=B\n", "unknown city 'B'")
}

#[test]
fn syntax_error() -> Result<(), Box<dyn std::error::Error>> {
    rejects("A east\n", "syntax error")
}

#[test]
fn missing_map_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(dir.path().join("nope.map")).arg("2");
    cmd.assert().failure().code(1).stderr(contains("cannot load map"));
    Ok(())
}

#[test]
fn bad_arguments_print_usage() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(BIN)?
        .assert()
        .failure()
        .stderr(contains("Usage"));

    Command::cargo_bin(BIN)?
        .args(["map.txt", "lots"])
        .assert()
        .failure()
        .code(2);

    Command::cargo_bin(BIN)?
        .args(["-gen", "out.map", "3", "3", "0.5"])
        .assert()
        .failure()
        .code(2);

    Ok(())
}
