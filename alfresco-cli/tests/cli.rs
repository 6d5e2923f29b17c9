use std::fs::write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn alfresco() -> Command {
    let mut cmd = Command::cargo_bin("alfresco").expect("Binary exists");
    cmd.env_remove("ALFRESCO_URL")
        .env_remove("ALFRESCO_USERNAME")
        .env_remove("ALFRESCO_PASSWORD")
        .env("RUST_LOG", "off");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(config.path(), contents).expect("Writing temp config failed");
    config
}

#[test]
fn help_lists_subcommands() {
    alfresco()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("node").and(predicate::str::contains("repo")));
}

#[test]
fn node_help_lists_operations() {
    alfresco()
        .args(["node", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("children")
                .and(predicate::str::contains("mkdir"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn missing_environment_url_fails() {
    alfresco()
        .args(["repo", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ALFRESCO_URL"));
}

#[test]
fn missing_config_file_fails() {
    alfresco()
        .args(["--config", "/nonexistent/alfresco.yaml", "node", "get", "-root-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}

#[test]
fn unknown_config_key_fails() {
    let config = config_file("base_url: http://127.0.0.1:1\nbucket_id: 42\n");
    alfresco()
        .arg("--config")
        .arg(config.path())
        .args(["repo", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn unreachable_server_fails_without_output() {
    let config = config_file("base_url: http://127.0.0.1:1\ntimeout_secs: 2\n");
    alfresco()
        .arg("--config")
        .arg(config.path())
        .args(["node", "get", "-root-"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
