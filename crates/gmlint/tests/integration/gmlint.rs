use std::process::Command;

use tempfile::TempDir;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

#[test]
fn test_no_gml_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Warning: No GML files found under the given path(s).

    ----- stderr -----

    ----- args -----
    check .
    "
    );

    Ok(())
}

#[test]
fn test_no_lints() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let test_path = "test.gml";
    let test_contents = "x = 1;\n";
    std::fs::write(directory.join(test_path), test_contents)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!

    ----- stderr -----

    ----- args -----
    check .
    "
    );

    Ok(())
}

#[test]
fn test_one_file_with_lints() -> anyhow::Result<()> {
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
    check . --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_several_files_sorted_by_name() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("attack.gml"), "var dmg;\n")?;
    std::fs::write(directory.join("player.gml"), "playerHealth = 100;\n")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    attack.gml [1] uninitialized_variable Variable declared without initialization
    attack.gml [1] unused_variable Variable 'dmg' declared but not used
    player.gml [1] naming_convention Variable/function name should follow camelCase convention

    Found 1 error and 2 warnings.

    ----- stderr -----

    ----- args -----
    check . --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_diagnostics_sorted_by_line() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // The error sits on a later line than the warning, so sorting by
    // position must win over severity grouping.
    let test_path = "test.gml";
    let test_contents = "playerHealth = 100;\nscore = 0;\nvar x;\n";
    std::fs::write(directory.join(test_path), test_contents)?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.gml [1] naming_convention Variable/function name should follow camelCase convention
    test.gml [3] uninitialized_variable Variable declared without initialization
    test.gml [3] unused_variable Variable 'x' declared but not used

    Found 1 error and 2 warnings.

    ----- stderr -----

    ----- args -----
    check . --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_invalid_utf8_file() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bad.gml"), [0xFF, 0xFE, 0x00])?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .arg("--output-format")
            .arg("concise")
            .run()
            .normalize_os_executable_name(),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: File is not valid UTF-8: bad.gml

    ----- args -----
    check . --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_explicit_file_path() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("attack.gml"), "var x;\n")?;
    std::fs::write(directory.join("other.gml"), "var y;\n")?;

    // Only the explicitly named file is checked.
    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg("attack.gml")
        .arg("--output-format")
        .arg("concise")
        .run();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.contains("attack.gml [1]"));
    assert!(!output.stdout.contains("other.gml"));

    Ok(())
}

#[test]
fn test_with_timing() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.gml"), "x = 1;\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .arg("check")
        .arg(".")
        .arg("--with-timing")
        .run();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.contains("Checked files in:"));

    Ok(())
}
