//! CLI integration tests

use std::path::Path;
use std::process::Command;

fn notigate_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_notigate"))
}

/// Run with config under `home` and a PATH where notify-send cannot be found
fn isolated_bin(home: &Path) -> Command {
    let mut cmd = notigate_bin();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("PATH", home)
        .env_remove("RUST_LOG")
        .env_remove("NOTIGATE_BACKEND");
    cmd
}

#[test]
fn help_output() {
    let output = notigate_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notification"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("request"));
    assert!(stdout.contains("send"));
    assert!(stdout.contains("--backend"));
}

#[test]
fn version_output() {
    let output = notigate_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notigate"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated_bin(home.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notigate"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = notigate_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_init_set_get() {
    let home = tempfile::tempdir().unwrap();

    let init = isolated_bin(home.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(init.status.success());

    let set = isolated_bin(home.path())
        .args(["config", "set", "timeout_ms", "4000"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = isolated_bin(home.path())
        .args(["config", "get", "timeout_ms"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "4000");

    let backend = isolated_bin(home.path())
        .args(["config", "get", "backend"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(String::from_utf8_lossy(&backend.stdout).trim(), "notify-rust");
}

#[test]
fn status_without_notify_send_is_denied() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated_bin(home.path())
        .args(["--backend", "notify-send", "status"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "denied");
}

#[test]
fn request_without_notify_send_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = isolated_bin(home.path())
        .args(["--backend", "notify-send", "request"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "denied");
}

#[test]
fn backend_from_config_file_is_used() {
    let home = tempfile::tempdir().unwrap();

    let set = isolated_bin(home.path())
        .args(["config", "set", "backend", "notify-send"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let output = isolated_bin(home.path())
        .arg("status")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "denied");
}

#[test]
fn backend_from_environment_overrides_config_file() {
    let home = tempfile::tempdir().unwrap();

    let set = isolated_bin(home.path())
        .args(["config", "set", "backend", "notify-rust"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let output = isolated_bin(home.path())
        .env("NOTIGATE_BACKEND", "notify-send")
        .args(["-v", "status"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "denied");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using notify-send notification backend"));
}
