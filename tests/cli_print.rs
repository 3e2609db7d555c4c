//! Integration test: headless `--print` mode of the binary.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Run the binary with a throwaway config so logs land in a temp dir.
fn run(name: &str, args: &[&str]) -> Output {
    let dir = std::env::temp_dir().join(format!("bsviz_cli_{name}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let config: PathBuf = dir.join("config.toml");
    let log = dir.join("bsviz.log");
    std::fs::write(
        &config,
        format!("log_file_path = {:?}\n", log.to_string_lossy()),
    )
    .expect("write config");

    Command::new(env!("CARGO_BIN_EXE_bsviz"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_bsviz"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn print_lists_steps() {
    let output = run("text", &["--print", "-a", "9,1,5,3,7", "-t", "4"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("array  = [1, 3, 5, 7, 9]"));
    assert!(stdout.contains("step 1/4: low=0, high=4, mid=2, array[mid]=5 > 4, moving high to 1"));
    assert!(stdout.contains("- step 4/4: Target 4 not found in the array"));
}

#[test]
fn print_json_is_parseable() {
    let output = run("json", &["--print", "--json", "-a", "1,3,5", "-t", "5"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["target"], 5);
    assert_eq!(value["steps"].as_array().unwrap().last().unwrap()["outcome"], "found");
}

#[test]
fn print_without_target_fails() {
    let output = run("missing", &["--print", "-a", "1,2,3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a target number."));
}

#[test]
fn print_with_empty_array_fails() {
    let output = run("empty", &["--print", "-a", "x, y", "-t", "1"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Array is empty"));
}

#[test]
fn print_random_is_reproducible_with_seed() {
    let args = ["--print", "--random", "20", "--seed", "11", "-t", "0"];
    let first = run("seed_a", &args);
    let second = run("seed_b", &args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
