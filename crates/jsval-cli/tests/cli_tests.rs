//! Integration tests for the `jsval` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the get, tag and
//! json subcommands through the actual binary, including stdin piping, file
//! I/O and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn jsval() -> Command {
    Command::cargo_bin("jsval").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// get
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_text_from_stdin() {
    jsval()
        .args(["get", "name"])
        .write_stdin(r#"{"name":"Ada"}"#)
        .assert()
        .success()
        .stdout("Ada\n");
}

#[test]
fn get_scalars_render_like_variants() {
    for (path, expected) in [
        ("age", "36\n"),
        ("active", "true\n"),
        ("score", "3.5\n"),
        ("nothing", "undefined\n"),
        ("missing", "undefined\n"),
    ] {
        jsval()
            .args(["get", path, "-i", sample_json_path()])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn get_containers_render_placeholders() {
    jsval()
        .args(["get", "tags", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("[array]\n");
    jsval()
        .args(["get", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("[object]\n");
}

#[test]
fn get_nested_sequence_position() {
    jsval()
        .args(["get", "tags.1", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("engines\n");
}

#[test]
fn get_integer_segment_on_mapping_is_stringified() {
    jsval()
        .args(["get", "address.0", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("zero-key\n");
}

#[test]
fn get_writes_output_file() {
    let dir = std::env::temp_dir().join(format!("jsval-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("city.txt");

    jsval()
        .args(["get", "address.city", "-i", sample_json_path(), "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "London\n");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn get_digit_segment_on_mapping_keeps_leading_zeros() {
    jsval()
        .args(["get", "a.00"])
        .write_stdin(r#"{"a":{"00":"double","0":"single"}}"#)
        .assert()
        .success()
        .stdout("double\n");
}

#[test]
fn get_digit_segment_longer_than_any_integer_is_a_mapping_key() {
    jsval()
        .args(["get", "a.99999999999999999999999"])
        .write_stdin(r#"{"a":{"99999999999999999999999":"big"}}"#)
        .assert()
        .success()
        .stdout("big\n");
}

#[test]
fn get_huge_digit_segment_on_sequence_is_out_of_range() {
    jsval()
        .args(["get", "99999999999999999999999"])
        .write_stdin("[1,2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// ─────────────────────────────────────────────────────────────────────────────
// tag
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tag_reports_shape() {
    for (path, expected) in [
        ("", "mapping\n"),
        ("tags", "sequence\n"),
        ("name", "text\n"),
        ("age", "number\n"),
        ("active", "flag\n"),
        ("nothing", "absence\n"),
    ] {
        jsval()
            .args(["tag", path, "-i", sample_json_path()])
            .assert()
            .success()
            .stdout(expected);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// json
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn json_prints_selected_subtree() {
    let output = jsval()
        .args(["json", "address", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"0": "zero-key", "city": "London"}));
}

#[test]
fn json_whole_numbers_stay_integers() {
    jsval()
        .args(["json", "age", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("36\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn indexing_a_scalar_fails_with_type_mismatch() {
    jsval()
        .args(["get", "name.first", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("type mismatch"))
        .stderr(predicate::str::contains("found text"));
}

#[test]
fn text_segment_on_sequence_fails() {
    jsval()
        .args(["get", "tags.first", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot index with 'first'"));
}

#[test]
fn sequence_position_out_of_range_is_reported() {
    jsval()
        .args(["get", "tags.2", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn invalid_json_input_fails() {
    jsval()
        .args(["get", "a"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON input"));
}

#[test]
fn missing_input_file_fails() {
    jsval()
        .args(["get", "-i", "/nonexistent/jsval.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
