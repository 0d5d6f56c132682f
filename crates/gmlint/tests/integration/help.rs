use std::process::Command;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

#[test]
fn test_help() {
    let output = Command::new(binary_path()).arg("help").run();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.contains("Find and Fix Lints in GML Code"));
    assert!(output.stdout.contains("check"));
    assert!(
        output
            .stdout
            .contains("For help with a specific command, see: `gmlint help <command>`.")
    );
}

#[test]
fn test_check_help() {
    let output = Command::new(binary_path()).arg("help").arg("check").run();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.contains("--fix"));
    assert!(output.stdout.contains("--fix-only"));
    assert!(output.stdout.contains("--select-rules"));
    assert!(output.stdout.contains("--ignore-rules"));
    assert!(output.stdout.contains("--statistics"));
    assert!(output.stdout.contains("--no-default-exclude"));
    assert!(output.stdout.contains("--output-format"));
    assert!(output.stdout.contains("--log-level"));
    assert!(output.stdout.contains("--no-color"));
}

#[test]
fn test_no_subcommand_shows_usage() {
    let output = Command::new(binary_path()).run();

    assert_eq!(output.status.code(), Some(2));
    let combined = format!("{}{}", output.stdout, output.stderr);
    assert!(combined.contains("Usage:"));
}

#[test]
fn test_check_without_files_shows_help() {
    let output = Command::new(binary_path()).arg("check").run();

    assert_eq!(output.status.code(), Some(2));
    let combined = format!("{}{}", output.stdout, output.stderr);
    assert!(combined.contains("Usage: gmlint check"));
}

#[test]
fn test_version() {
    let output = Command::new(binary_path()).arg("--version").run();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.contains("gmlint"));
}
