//! Command-line behaviour of the binary in one-shot mode

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

mod common;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("event-summary").unwrap();
    cmd.env("LOG_LEVEL", "ERROR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_one_shot_writes_summary() {
    let dir = tempdir().unwrap();
    let input = common::write_events(dir.path(), "events.json", common::SAMPLE_EVENTS).unwrap();
    let output = dir.path().join("summary.json");

    cli()
        .current_dir(dir.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read(&output).unwrap();
    assert_eq!(common::summary_set(&written).len(), 2);
    assert_eq!(common::total_count(&written), 4);
}

#[test]
fn test_missing_output_path_is_reported() {
    let dir = tempdir().unwrap();
    let input = common::write_events(dir.path(), "events.json", "[]").unwrap();

    cli()
        .current_dir(dir.path())
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_malformed_input_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let input = common::write_events(
        dir.path(),
        "events.json",
        r#"[{"userId":1,"eventType":"click"}]"#,
    )
    .unwrap();
    let output = dir.path().join("summary.json");
    fs::write(&output, "previous").unwrap();

    cli()
        .current_dir(dir.path())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("failed to decode events")
                .and(predicate::str::contains("events.json")),
        );

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_unreadable_input_names_the_file() {
    let dir = tempdir().unwrap();

    cli()
        .current_dir(dir.path())
        .arg("-i")
        .arg(dir.path().join("nope.json"))
        .arg("-o")
        .arg(dir.path().join("summary.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_config_file_is_reported_once_logging_starts() {
    let dir = tempdir().unwrap();
    let input = common::write_events(dir.path(), "events.json", "[]").unwrap();
    fs::write(
        dir.path().join("event-summary.toml"),
        r#"
[logging]
level = "INFO"
format = "json"
output = "console"

[polling]
interval_secs = 2

[output]
json_pretty = false

[paths]
log_directory = "logs"
"#,
    )
    .unwrap();

    cli()
        .current_dir(dir.path())
        .env_remove("LOG_LEVEL")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("summary.json"))
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Loaded configuration from file")
                .and(predicate::str::contains("event-summary.toml")),
        );

    assert_eq!(fs::read_to_string(dir.path().join("summary.json")).unwrap(), "[]");
}
