use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

#[test]
fn test_select_rules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = "test.gml";
    let test_contents = "var x;\nplayerHealth = 100;  \n";
    std::fs::write(directory.join(test_path), test_contents)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--select-rules")
            .arg("trailing_whitespace")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.gml [2] trailing_whitespace Trailing whitespace

    Found 1 warning.

    ----- stderr -----

    ----- args -----
    check . --select-rules trailing_whitespace --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_select_rule_group() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // `CORR` keeps the uninitialized/unused checks but drops the style ones,
    // so the naming violation on line 2 goes unreported.
    let test_path = "test.gml";
    let test_contents = "var x;\nplayerHealth = 100;\n";
    std::fs::write(directory.join(test_path), test_contents)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--select-rules")
            .arg("CORR")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.gml [1] uninitialized_variable Variable declared without initialization
    test.gml [1] unused_variable Variable 'x' declared but not used

    Found 1 error and 1 warning.

    ----- stderr -----

    ----- args -----
    check . --select-rules CORR --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_ignore_rules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = "test.gml";
    let test_contents = "var x;\n";
    std::fs::write(directory.join(test_path), test_contents)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--ignore-rules")
            .arg("unused_variable")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.gml [1] uninitialized_variable Variable declared without initialization

    Found 1 error.

    ----- stderr -----

    ----- args -----
    check . --ignore-rules unused_variable --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_ignore_rule_group() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = "test.gml";
    let test_contents = "var x;\nplayerHealth = 100;  \n";
    std::fs::write(directory.join(test_path), test_contents)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--ignore-rules")
            .arg("CORR")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.gml [2] trailing_whitespace Trailing whitespace
    test.gml [2] naming_convention Variable/function name should follow camelCase convention

    Found 2 warnings.

    ----- stderr -----

    ----- args -----
    check . --ignore-rules CORR --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_unknown_select_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.gml"), "var x;\n")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--select-rules")
            .arg("foo")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    gmlint failed
      Cause: Unknown rules in `--select-rules`: foo

    ----- args -----
    check . --select-rules foo
    "
    );

    Ok(())
}

#[test]
fn test_unknown_ignore_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.gml"), "var x;\n")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--ignore-rules")
            .arg("foo,bar")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    gmlint failed
      Cause: Unknown rules in `--ignore-rules`: foo, bar

    ----- args -----
    check . --ignore-rules foo,bar
    "
    );

    Ok(())
}

#[test]
fn test_empty_entry_in_select_rules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.gml"), "var x;\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--select-rules")
        .arg("trailing_whitespace,")
        .run();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stderr.contains("gmlint failed"));
    assert!(
        output
            .stderr
            .contains("empty or whitespace-only not allowed")
    );

    Ok(())
}

#[test]
fn test_select_and_ignore_same_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Ignoring wins over selecting, leaving nothing to report.
    std::fs::write(directory.join("test.gml"), "var x;\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--select-rules")
        .arg("uninitialized_variable,unused_variable")
        .arg("--ignore-rules")
        .arg("uninitialized_variable,unused_variable")
        .arg("--output-format")
        .arg("concise")
        .run();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.contains("All checks passed!"));

    Ok(())
}
