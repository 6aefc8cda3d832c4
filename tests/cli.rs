use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn stepwise(args: &[&str], log_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stepwise"))
        .args(args)
        .env("STEPWISE_LOG", log_dir.join("stepwise.log"))
        .output()
        .expect("run stepwise")
}

fn definition(dir: &Path) -> String {
    let path = dir.join("wizard.toml");
    fs::write(
        &path,
        r#"
[[steps]]
id = "intro"
title = "Welcome"

[[steps]]
legend = "Details"
"#,
    )
    .unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn check_lists_the_steps() {
    let dir = tempfile::tempdir().unwrap();
    let path = definition(dir.path());

    let output = stepwise(&["--check", &path], dir.path());
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 steps"));
    assert!(stdout.contains("1. Welcome (intro)"));
    assert!(stdout.contains("2. Details (step-1)"));
}

#[test]
fn check_accepts_option_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = definition(dir.path());

    let output = stepwise(
        &["--check", "--set", "counter.enable=true", "--set", "buttons.cancelText=Abort", &path],
        dir.path(),
    );
    assert!(output.status.success(), "{output:?}");
}

#[test]
fn unknown_option_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = definition(dir.path());

    let output = stepwise(&["--check", "--set", "buttons.okText=OK", &path], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("buttons.okText"));
}

#[test]
fn wrong_value_shape_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = definition(dir.path());

    let output = stepwise(&["--check", "--set", "menuEnable=maybe", &path], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("menuEnable"));
}

#[test]
fn missing_definition_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = stepwise(&["--check", &missing.to_string_lossy()], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.toml"));
}
