//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("conf-resolve"));
    cmd.env_remove("CONF_RESOLVE_ENV")
        .env_remove("CONF_RESOLVE_BASE_DIR")
        .env_remove("CONF_RESOLVE_CONF_DIR");
    cmd
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

fn fixture() -> TempDir {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("config.json"), r#"{"DATABASE_URL": "postgres://json/db"}"#)
        .expect("write json");
    fs::write(
        tmp.path().join("config.toml"),
        "database_url = \"postgres://toml/db\"\n\n[production]\nworkers = 16\n\n[staging]\nworkers = 4\n",
    )
    .expect("write toml");
    fs::write(tmp.path().join(".env"), "DATABASE_URL_ENV=postgres://env/db\n").expect("write env");
    fs::write(tmp.path().join("notes.txt"), "ignored").expect("write txt");
    tmp
}

#[test]
fn test_cli_version() {
    cli().arg("--version").assert().success().stdout(predicate::str::contains("conf-resolve"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discover, parse and merge"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("files"))
        .stdout(predicate::str::contains("detect"));
}

#[test]
fn test_get_reads_each_format() {
    let tmp = fixture();
    for (key, expected) in [
        ("DATABASE_URL", "postgres://json/db"),
        ("database_url", "postgres://toml/db"),
        ("DATABASE_URL_ENV", "postgres://env/db"),
    ] {
        cli()
            .args(["--base-dir", path_arg(tmp.path()), "get", key])
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    }
}

#[test]
fn test_get_missing_key_uses_default() {
    let tmp = fixture();
    cli()
        .args(["--base-dir", path_arg(tmp.path()), "get", "missing", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");
}

#[test]
fn test_get_missing_key_fails_without_default() {
    let tmp = fixture();
    cli()
        .args(["--base-dir", path_arg(tmp.path()), "get", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key 'missing' not found"));
}

#[test]
fn test_malformed_env_file_fails_load() {
    let tmp = fixture();
    fs::write(tmp.path().join(".env"), "DATABASE_URL_ENV=postgres://env/db\njustsometext\n")
        .expect("write env");

    cli()
        .args(["--base-dir", path_arg(tmp.path()), "get", "DATABASE_URL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse env config file"))
        .stderr(predicate::str::contains("justsometext"));
}

#[test]
fn test_dump_prints_merged_table() {
    let tmp = fixture();
    cli()
        .args(["--base-dir", path_arg(tmp.path()), "dump", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""DATABASE_URL":"postgres://json/db""#))
        .stdout(predicate::str::contains(r#""database_url":"postgres://toml/db""#))
        .stdout(predicate::str::contains(r#""production":{"workers":16}"#));
}

#[test]
fn test_files_lists_only_recognised_files() {
    let tmp = fixture();
    cli()
        .args(["--base-dir", path_arg(tmp.path()), "files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(".env"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_conf_dir_takes_precedence() {
    let tmp = fixture();
    let conf = tmp.path().join("configs");
    fs::create_dir(&conf).expect("mkdir");
    fs::write(conf.join("app.yaml"), "DATABASE_URL: postgres://conf/db\n").expect("write yaml");

    cli()
        .args(["--base-dir", path_arg(tmp.path()), "get", "DATABASE_URL"])
        .assert()
        .success()
        .stdout("postgres://conf/db\n");
}

#[test]
fn test_sources_merge_in_given_order() {
    let tmp = TempDir::new().expect("tmp");
    let first = tmp.path().join("first.json");
    let second = tmp.path().join("second.env");
    fs::write(&first, r#"{"LEVEL": "json"}"#).expect("write");
    fs::write(&second, "LEVEL=env\n").expect("write");

    cli()
        .args(["-s", path_arg(&first), "-s", path_arg(&second), "get", "LEVEL"])
        .assert()
        .success()
        .stdout("env\n");

    cli()
        .args(["-s", path_arg(&second), "-s", path_arg(&first), "get", "LEVEL"])
        .assert()
        .success()
        .stdout("json\n");
}

#[test]
fn test_unsupported_source_file_fails() {
    let tmp = TempDir::new().expect("tmp");
    let ini = tmp.path().join("settings.ini");
    fs::write(&ini, "a=1\n").expect("write");

    cli()
        .args(["-s", path_arg(&ini), "get", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported config file extension"));
}

#[test]
fn test_environment_flags_scope_lookups() {
    let tmp = fixture();
    cli()
        .args(["--base-dir", path_arg(tmp.path()), "--prod", "get", "workers", "--scoped"])
        .assert()
        .success()
        .stdout("16\n");

    cli()
        .args(["--base-dir", path_arg(tmp.path()), "--dev", "get", "workers", "--scoped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment 'development' not found"));
}

#[test]
fn test_environment_variable_selects_section() {
    let tmp = fixture();
    cli()
        .env("CONF_RESOLVE_ENV", "staging")
        .args(["--base-dir", path_arg(tmp.path()), "get", "workers", "--scoped"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_environment_flags_conflict() {
    cli().args(["--dev", "--prod", "files"]).assert().failure();
}

#[test]
fn test_detect_reports_formats() {
    cli()
        .args(["detect", "config.json", ".env", "app.yml", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json\tjson"))
        .stdout(predicate::str::contains(".env\tenv"))
        .stdout(predicate::str::contains("app.yml\tyaml"))
        .stdout(predicate::str::contains("notes.txt\tunsupported"));
}
