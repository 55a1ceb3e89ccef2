//! End-to-end tests for the `gprop` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gprop_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gprop"));
    cmd.current_dir(dir);
    cmd.env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd.env("NO_COLOR", "1");
    cmd.env("GPROP_LOG", "error");
    cmd
}

fn write_input(dir: &Path, name: &str, text: &str) -> String {
    fs::write(dir.join(name), text).expect("write input");
    name.to_string()
}

#[test]
fn analyze_square_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "square.txt", "{A,B,C,D}{(A,B),(B,C),(C,D),(D,A)}\n");

    gprop_cmd(dir.path())
        .args(["analyze", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Node count: 4"))
        .stdout(predicate::str::contains("Edge count: 4"))
        .stdout(predicate::str::contains("Max degree: 2"))
        .stdout(predicate::str::contains("Connected: yes"))
        .stdout(predicate::str::contains("Complete: no"))
        .stdout(predicate::str::contains("Tree: no"))
        .stdout(predicate::str::contains("Forest: no"))
        .stdout(predicate::str::contains("Cycle count: 1"));
}

#[test]
fn bare_invocation_reads_stdin() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .write_stdin("{A,B,C}{(A,B),(B,C)}")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree: yes"));
}

#[test]
fn analyze_matrix_json() {
    let dir = TempDir::new().unwrap();

    let output = gprop_cmd(dir.path())
        .args(["analyze", "-", "--json"])
        .write_stdin("0\n1 0\n0 0 0\n0 0 1 0\n")
        .output()
        .expect("analyze should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["node_count"], 4);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["is_connected"], false);
    assert_eq!(json["is_forest"], true);
    assert_eq!(json["has_isolated_node"], false);
    assert_eq!(json["forest_policy"], "disconnected");
}

#[test]
fn forest_policy_flag() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .args(["analyze", "--forest", "acyclic"])
        .write_stdin("{A,B}{(A,B)}")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree: yes"))
        .stdout(predicate::str::contains("Forest: yes"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path()).args(["init"]).assert().success();
    let config_path = dir.path().join(".gprop").join("config.json");
    assert!(config_path.exists());

    fs::write(&config_path, r#"{ "json": true }"#).unwrap();

    let output = gprop_cmd(dir.path())
        .write_stdin("{A}{}")
        .output()
        .expect("analyze should not crash");
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["is_tree"], true);

    gprop_cmd(dir.path())
        .args(["analyze", "--no-json"])
        .write_stdin("{A}{}")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree: yes"));
}

#[test]
fn empty_input_has_same_code_for_every_format() {
    let dir = TempDir::new().unwrap();

    for format in ["auto", "list", "matrix"] {
        gprop_cmd(dir.path())
            .args(["analyze", "--format", format])
            .write_stdin("  \n")
            .assert()
            .code(2);
    }
}

#[test]
fn duplicate_edge_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .write_stdin("{A,B}{(A,B),(B,A)}")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edge count: 1"))
        .stderr(predicate::str::contains(
            "warning: edge (B,A) == (A,B) already exists",
        ));
}

#[test]
fn exit_code_matches_error_kind() {
    let dir = TempDir::new().unwrap();
    let cases = [
        ("{A,B}{(A,B}", 1),
        ("{}{}", 2),
        ("{A,A}{}", 5),
        ("{A}{(A,B)}", 6),
        ("{A}{(A,A)}", 7),
    ];

    for (input, code) in cases {
        gprop_cmd(dir.path())
            .write_stdin(input)
            .assert()
            .code(code)
            .stderr(predicate::str::starts_with("error:"));
    }
}

#[test]
fn too_many_nodes() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..64).map(|i| format!("n{i}")).collect();

    gprop_cmd(dir.path())
        .write_stdin(format!("{{{}}}{{}}", names.join(",")))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node limit reached (63)"));
}

#[test]
fn name_too_long() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .write_stdin(format!("{{{}}}{{}}", "x".repeat(300)))
        .assert()
        .code(4);
}

#[test]
fn missing_input_file_is_internal_error() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .args(["analyze", "nope.txt"])
        .assert()
        .code(99)
        .stderr(predicate::str::contains("cannot read nope.txt"));
}

#[test]
fn cycles_lists_named_cycles() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .args(["cycles"])
        .write_stdin("{A,B,C,D}{(A,B),(B,C),(C,A),(C,D)}")
        .assert()
        .success()
        .stdout(predicate::str::contains("A - B - C - A"))
        .stdout(predicate::str::contains("Cycle count: 1"));
}

#[test]
fn export_dot_to_file() {
    let dir = TempDir::new().unwrap();

    gprop_cmd(dir.path())
        .args(["export", "--to", "dot", "-o", "graph.dot"])
        .write_stdin("{A,B}{(A,B)}")
        .assert()
        .success();

    let dot = fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert!(dot.contains("\"A\" -- \"B\";"));
}

#[test]
fn export_json_to_stdout() {
    let dir = TempDir::new().unwrap();

    let output = gprop_cmd(dir.path())
        .args(["export"])
        .write_stdin("0\n1 0\n")
        .output()
        .expect("export should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["nodes"], serde_json::json!(["1", "2"]));
    assert_eq!(json["edges"], serde_json::json!([["1", "2"]]));
}
