use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn json_indent_comes_from_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[convert.json]
indent = 4
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("polyconf");
    cmd.current_dir(dir.path())
        .args(["--from", "YAML", "--to", "JSON", "--config"])
        .arg(config_path.as_os_str())
        .write_stdin("a:\n  b: 1\n");

    cmd.assert()
        .success()
        .stdout("{\n    \"a\": {\n        \"b\": 1\n    }\n}\n");
}

#[test]
fn working_directory_config_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("polyconf.toml"),
        r#"[convert]
trailing_newline = false
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("polyconf");
    cmd.current_dir(dir.path())
        .args(["--from", "YAML", "--to", "JSON"])
        .write_stdin("a: 1\n");

    cmd.assert().success().stdout("{\n  \"a\": 1\n}");
}

#[test]
fn last_report_mode_shows_only_the_final_attempt() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[detection]
report = "last"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("polyconf");
    cmd.current_dir(dir.path())
        .args(["--to", "JSON", "--config"])
        .arg(config_path.as_os_str())
        .write_stdin("{ this is [ not valid");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Unable to parse HCL")
                .and(predicate::str::contains("Unable to parse JSON").not()),
        );
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("polyconf");
    cmd.current_dir(dir.path())
        .args(["--to", "JSON", "--config"])
        .arg(dir.path().join("absent.toml").as_os_str())
        .write_stdin("{}");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn invalid_report_mode_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[detection]\nreport = \"first\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("polyconf");
    cmd.current_dir(dir.path())
        .args(["--to", "JSON", "--config"])
        .arg(config_path.as_os_str())
        .write_stdin("{}");

    cmd.assert().failure().code(1);
}
