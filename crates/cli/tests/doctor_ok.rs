use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1
profile = "default"

[profiles.default]
index_root = "/tmp/takedex-idx"

[profiles.second-account]
index_root = "/tmp/takedex-second"
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tdx"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   tdx doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("index_root: /tmp/takedex-idx"))
        .stdout(predicate::str::contains("failed_dir: /tmp/takedex-idx/FAILED"));
}

#[test]
fn doctor_selects_profile_override() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1
profile = "default"

[profiles.default]
index_root = "/tmp/takedex-idx"

[profiles.second-account]
index_root = "/tmp/takedex-second"
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tdx"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--profile", "second-account"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("profile: second-account"))
        .stdout(predicate::str::contains("index_root: /tmp/takedex-second"));
}

#[test]
fn doctor_falls_back_to_builtin_defaults() {
    let tmp = tempdir().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tdx"));
    // No config anywhere: point HOME and XDG at an empty sandbox.
    cmd.env("HOME", &home);
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("xdg"));
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   tdx doctor"))
        .stdout(predicate::str::contains(format!(
            "index_root: {}",
            home.join(".takedex").display()
        )));
}

#[test]
fn doctor_fails_on_missing_explicit_config() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tdx"));
    cmd.args(["doctor", "--config", "/no/such/config.toml"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL tdx doctor"))
        .stdout(predicate::str::contains("config file not found"));
}
