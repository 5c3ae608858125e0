//! Runs the built binary against documents on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "models": [{
        "name": "phone-number",
        "properties": [
            {"name": "created-at", "type": {"kind": "primitive", "name": "string"}},
            {"name": "type", "type": {"kind": "primitive", "name": "string"}}
        ]
    }],
    "operations": [{
        "operation_id": "return",
        "http_method": "GET",
        "path": "/numbers"
    }]
}"#;

fn rustgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rustgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUSTGEN_LOG")
        .output()
        .expect("failed to run rustgen")
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.json"), DOCUMENT).unwrap();
    dir
}

#[test]
fn test_check_reports_renames() {
    let dir = workspace();
    let output = rustgen(dir.path(), &["check", "doc.json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("doc.json is valid"));
    assert!(stdout.contains("info: type (reserved word) escaped to _type"));
    assert!(stderr.contains("warning: return (reserved word) cannot be used as method name"));
}

#[test]
fn test_plan_prints_json() {
    let dir = workspace();
    let output = rustgen(dir.path(), &["plan", "doc.json", "--package-name", "numbers"]);

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["additional_properties"]["packageName"], "numbers");
    assert_eq!(plan["models"][0]["class_name"], "PhoneNumber");
    assert_eq!(plan["models"][0]["vars"][1]["var_name"], "_type");
    assert_eq!(plan["apis"][0]["operations"][0]["nickname"], "call_return");
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = workspace();
    fs::write(
        dir.path().join("rustgen.toml"),
        "[reserved_words_mappings]\ntype = \"kind\"\n",
    )
    .unwrap();

    let output = rustgen(dir.path(), &["plan", "doc.json"]);

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["models"][0]["vars"][1]["var_name"], "kind");
}

#[test]
fn test_invalid_config_fails() {
    let dir = workspace();
    fs::write(dir.path().join("bad.toml"), "[package]\nname = \"\"\n").unwrap();

    let output = rustgen(dir.path(), &["files", "-c", "bad.toml"]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_document_fails() {
    let dir = TempDir::new().unwrap();
    let output = rustgen(dir.path(), &["check", "missing.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read missing.json"));
}

#[test]
fn test_files_lists_supporting_files() {
    let dir = TempDir::new().unwrap();
    let output = rustgen(dir.path(), &["files", "--output", "out"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Supporting files:"));
    assert!(stdout.contains("(Cargo.mustache)"));
    assert!(stdout.contains("api_doc.mustache: *.md"));
}
