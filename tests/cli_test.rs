//! Exit-status tests against the built binary.

use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

fn burrito_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_burrito"))
}

#[test]
fn no_parameters_prints_help_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(burrito_bin())
        .current_dir(dir.path())
        .output()
        .expect("failed to run burrito");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Burrito collects ssm parameters"));
    assert!(stdout.contains("No parameters were passed in"));
    assert!(!dir.path().join("burrito.sh").exists());
}

#[test]
fn flags_without_parameters_still_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.sh");

    let status = Command::new(burrito_bin())
        .current_dir(dir.path())
        .arg(format!("-file_path={}", out.display()))
        .status()
        .expect("failed to run burrito");

    assert_eq!(status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn missing_credentials_exit_3_without_writing() {
    let dir = tempfile::tempdir().unwrap();

    let status = Command::new(burrito_bin())
        .current_dir(dir.path())
        .env_clear()
        .env("HOME", dir.path())
        .env("AWS_CONFIG_FILE", dir.path().join("no-config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", dir.path().join("no-credentials"))
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("DB_PASS", "prod/db/password")
        .arg("DB_PASS")
        .status()
        .expect("failed to run burrito");

    assert_eq!(status.code(), Some(3));
    assert!(!dir.path().join("burrito.sh").exists());
}

#[test]
fn otlp_export_to_closed_port_does_not_stall_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("burrito.sh");

    let started = Instant::now();
    let output = Command::new(burrito_bin())
        .current_dir(dir.path())
        .env_clear()
        .env("HOME", dir.path())
        .env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")
        .env("AWS_SECRET_ACCESS_KEY", "secret")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_ENDPOINT_URL", "http://127.0.0.1:9")
        .env("AWS_MAX_ATTEMPTS", "1")
        .env("OTEL_ENDPOINT", "http://127.0.0.1:9")
        .env("DB_PASS", "prod/db/password")
        .arg("DB_PASS")
        .output()
        .expect("failed to run burrito");
    let elapsed = started.elapsed();

    // The lookup fails and is skipped; the header-only script is still written.
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Skipped parameter: DB_PASS"));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "#!/bin/bash\n\n");
    // At the default log level the skip is reported on stdout only.
    assert!(!String::from_utf8_lossy(&output.stderr).contains("lookup failed"));
    assert!(
        elapsed < Duration::from_secs(5),
        "telemetry shutdown took {elapsed:?}"
    );
}
