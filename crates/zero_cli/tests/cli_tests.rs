//! Integration tests running the zero binary.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn zero() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_zero"));
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_inspect_prints_generator_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("zero.yml");
    fs::write(
        &path,
        r#"
name: acme
modules:
  - source: github.com/commitdev/zero-deployable-backend
    output: backend
"#,
    )
    .unwrap();

    let output = zero().arg("inspect").arg(&path).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("name: acme"));
    assert!(stdout.contains("github.com/commitdev/zero-deployable-backend"));
}

#[test]
fn test_inspect_parse_failure_exit_code() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("zero.yml");
    fs::write(&path, "modules: [").unwrap();

    let output = zero().arg("inspect").arg(&path).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_init_with_invalid_registry_exit_code() {
    let temp = tempdir().unwrap();
    let registry = temp.path().join("stacks.yml");
    fs::write(&registry, "- not a mapping\n").unwrap();

    let output = zero()
        .arg("init")
        .arg(temp.path())
        .arg("--registry")
        .arg(&registry)
        .arg("--credentials")
        .arg(temp.path().join("credentials.yml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
