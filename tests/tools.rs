// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::path::PathBuf;
use std::process::Command;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use lazy_static::lazy_static;
use ntest::timeout;
use predicates::str::contains;

lazy_static! {
    static ref BIN_PATH: PathBuf = cargo_bin(env!("CARGO_PKG_NAME"));
}

#[test]
fn convert_celsius() {
    Command::new(&*BIN_PATH)
        .args(["convert", "100", "-u", "C"])
        .assert()
        .success()
        .stdout(contains("100°C is 212°F"));
}

#[test]
fn convert_negative_fahrenheit() {
    Command::new(&*BIN_PATH)
        .args(["convert", "-40", "--unit", "fahrenheit", "-d", "2"])
        .assert()
        .success()
        .stdout(contains("-40°F is -40.00°C"));
}

#[test]
fn convert_invalid_unit() {
    Command::new(&*BIN_PATH)
        .args(["convert", "10", "-u", "K"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid value 'K'"));
}

#[test]
fn analyze_arguments() {
    Command::new(&*BIN_PATH)
        .args(["analyze", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout(contains("Analysis Results:"))
        .stdout(contains("Count: 5.00"))
        .stdout(contains("Sum: 15.00"))
        .stdout(contains("Average: 3.00"))
        .stdout(contains("Minimum: 1.00"))
        .stdout(contains("Maximum: 5.00"))
        .stdout(contains("Even numbers: 2.00"))
        .stdout(contains("Odd numbers: 3.00"));
}

#[test]
#[timeout(10_000)]
fn analyze_stdin() {
    assert_cmd::Command::new(&*BIN_PATH)
        .arg("analyze")
        .write_stdin("3\nabc\n-1\nDONE\n99\n")
        .assert()
        .success()
        .stdout(contains("Count: 2.00"))
        .stdout(contains("Sum: 2.00"))
        .stdout(contains("Minimum: -1.00"))
        .stderr(contains("Please provide a number, 'abc' is not one!"));
}

#[test]
#[timeout(10_000)]
fn analyze_stdin_json() {
    let output = assert_cmd::Command::new(&*BIN_PATH)
        .args(["analyze", "--json"])
        .write_stdin("10\n20\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["sum"], 30.0);
    assert_eq!(json["maximum"], 20.0);
}

#[test]
#[timeout(10_000)]
fn analyze_nothing() {
    assert_cmd::Command::new(&*BIN_PATH)
        .arg("analyze")
        .write_stdin("done\n")
        .assert()
        .success()
        .stdout(contains("No numbers entered!"));
}
