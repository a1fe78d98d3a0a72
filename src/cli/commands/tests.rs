//! CLI command tests
//!
//! End-to-end runs of each command against temp files.

use super::*;
use crate::config::*;
use crate::storage::StateFile;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    config: PathBuf,
    state: PathBuf,
    predictions: PathBuf,
}

/// Create a small valid config with predictions and labels on disk
fn fixture(predictions: &str, labels: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("evaluar.yaml");
    let predictions_path = dir.path().join("y_test.csv");
    let labels_path = dir.path().join("labels.csv");

    std::fs::write(&predictions_path, predictions).unwrap();
    std::fs::write(&labels_path, labels).unwrap();

    let config = format!(
        r#"
predictions: {}
labels: {}
num_classes: 3
min_batch_size: 2
window_size: 4
"#,
        predictions_path.display(),
        labels_path.display()
    );
    std::fs::write(&config_path, config).unwrap();

    Fixture {
        state: dir.path().join("state.json"),
        config: config_path,
        predictions: predictions_path,
        dir,
    }
}

fn engine_args(f: &Fixture) -> EngineArgs {
    EngineArgs {
        config: f.config.clone(),
        state: f.state.clone(),
        predictions: None,
        labels: None,
    }
}

fn cli(command: Command) -> Cli {
    Cli {
        command,
        verbose: false,
        quiet: true,
        log_json: false,
    }
}

#[test]
fn test_cycle_command_persists_state() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n2\n0\n");

    let result = run_command(cli(Command::Cycle(CycleArgs {
        engine: engine_args(&f),
        format: OutputFormat::Text,
    })));
    assert!(result.is_ok(), "{result:?}");

    let persisted = StateFile::new(&f.state).load().unwrap();
    assert_eq!(persisted.state.cursor, 11);
    assert_eq!(persisted.state.totals.true_positive, 3);
    assert!(persisted.last_metrics.is_some());
    assert!(persisted.updated_at.is_some());
}

#[test]
fn test_cycle_command_json_output() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n2\n0\n");

    let result = run_command(cli(Command::Cycle(CycleArgs {
        engine: engine_args(&f),
        format: OutputFormat::Json,
    })));
    assert!(result.is_ok());
}

#[test]
fn test_cycle_command_pending_keeps_cursor() {
    let f = fixture("0\n1\n", "0\n1\n");

    run_command(cli(Command::Cycle(CycleArgs {
        engine: engine_args(&f),
        format: OutputFormat::Text,
    })))
    .unwrap();

    let persisted = StateFile::new(&f.state).load().unwrap();
    assert_eq!(persisted.state.cursor, 0);
    assert!(persisted.last_metrics.is_none());
}

#[test]
fn test_cycle_failure_leaves_state_file_alone() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n");

    let result = run_command(cli(Command::Cycle(CycleArgs {
        engine: engine_args(&f),
        format: OutputFormat::Text,
    })));
    let err = result.unwrap_err();
    assert!(err.contains("Cycle failed"));
    assert!(err.contains("Length mismatch"));
    assert!(!f.state.exists());
}

#[test]
fn test_cycle_with_label_override() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n");
    let good_labels = f.dir.path().join("good.csv");
    std::fs::write(&good_labels, "0\n1\n2\n1\n").unwrap();

    let mut args = engine_args(&f);
    args.labels = Some(good_labels);
    run_command(cli(Command::Cycle(CycleArgs {
        engine: args,
        format: OutputFormat::Text,
    })))
    .unwrap();

    let persisted = StateFile::new(&f.state).load().unwrap();
    assert_eq!(persisted.state.totals.true_positive, 4);
}

#[test]
fn test_cycle_missing_config() {
    let f = fixture("", "");
    let mut args = engine_args(&f);
    args.config = f.dir.path().join("missing.yaml");

    let err = run_command(cli(Command::Cycle(CycleArgs {
        engine: args,
        format: OutputFormat::Text,
    })))
    .unwrap_err();
    assert!(err.contains("Config error"));
}

#[test]
fn test_watch_bounded_accumulates() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n2\n0\n");

    run_command(cli(Command::Watch(WatchArgs {
        engine: engine_args(&f),
        interval: 0,
        max_cycles: Some(2),
    })))
    .unwrap();

    // Second tick found no new batch
    let persisted = StateFile::new(&f.state).load().unwrap();
    assert_eq!(persisted.state.cursor, 11);
    assert_eq!(persisted.state.totals.total, 4);

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&f.predictions)
        .unwrap();
    std::io::Write::write_all(&mut file, b"2\n2\n0\n1\n-1\n").unwrap();

    run_command(cli(Command::Watch(WatchArgs {
        engine: engine_args(&f),
        interval: 0,
        max_cycles: Some(1),
    })))
    .unwrap();

    let persisted = StateFile::new(&f.state).load().unwrap();
    assert_eq!(persisted.state.cursor, 22);
    assert_eq!(persisted.state.totals.total, 8);
}

#[test]
fn test_watch_survives_failed_cycles() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n");

    let result = run_command(cli(Command::Watch(WatchArgs {
        engine: engine_args(&f),
        interval: 0,
        max_cycles: Some(2),
    })));
    assert!(result.is_ok());
    assert!(!f.state.exists());
}

#[test]
fn test_validate_command() {
    let f = fixture("", "");
    let result = run_command(cli(Command::Validate(ValidateArgs {
        config: f.config.clone(),
    })));
    assert!(result.is_ok());
}

#[test]
fn test_validate_command_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.yaml");
    std::fs::write(
        &config,
        "predictions: p.csv\nlabels: l.csv\nnum_classes: 3\nsentinel: 1\n",
    )
    .unwrap();

    let err = run_command(cli(Command::Validate(ValidateArgs { config }))).unwrap_err();
    assert!(err.contains("Config error"));
    assert!(err.contains("Sentinel"));
}

#[test]
fn test_status_command() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n2\n0\n");
    run_command(cli(Command::Cycle(CycleArgs {
        engine: engine_args(&f),
        format: OutputFormat::Text,
    })))
    .unwrap();

    for format in [OutputFormat::Text, OutputFormat::Json] {
        let result = run_command(cli(Command::Status(StatusArgs {
            state: f.state.clone(),
            format,
        })));
        assert!(result.is_ok());
    }
}

#[test]
fn test_status_missing_state() {
    let dir = TempDir::new().unwrap();
    let err = run_command(cli(Command::Status(StatusArgs {
        state: dir.path().join("none.json"),
        format: OutputFormat::Text,
    })))
    .unwrap_err();
    assert!(err.contains("State file not found"));
}

#[test]
fn test_format_status_text() {
    let f = fixture("0\n1\n2\n1\n-1\n", "0\n1\n2\n0\n");
    run_command(cli(Command::Cycle(CycleArgs {
        engine: engine_args(&f),
        format: OutputFormat::Text,
    })))
    .unwrap();

    let persisted = StateFile::new(&f.state).load().unwrap();
    let text = status::format_status(&persisted);
    assert!(text.contains("Cursor: 11"));
    assert!(text.contains("TP=3"));
    assert!(text.contains("recall=0.75"));
    assert!(text.contains("Last evaluated"));
}
