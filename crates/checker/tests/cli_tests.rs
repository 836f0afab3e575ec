//! CLI integration tests

use std::process::Command;

/// Test that the checker shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "station-checker", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("golden images"),
        "Should describe the check"
    );
    assert!(stdout.contains("titansma"), "Should show titansma command");
    assert!(stdout.contains("fortimus"), "Should show fortimus command");
    assert!(
        stdout.contains("--nagios-url"),
        "Should show nagios-url option"
    );
    assert!(stdout.contains("NAGIOS_URL"), "Should show env var");
    assert!(
        stdout.contains("--golden-dir"),
        "Should show golden-dir option"
    );
    assert!(
        stdout.contains("--cred-file"),
        "Should show cred-file option"
    );
}

/// Test missing required argument error handling
#[test]
fn test_missing_arguments() {
    let output = Command::new("cargo")
        .args(["run", "-p", "station-checker", "--", "titansma"])
        .env_remove("NAGIOS_URL")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing arguments should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing arguments"
    );
}

/// Test invalid subcommand error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "station-checker", "--", "centaur"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}
