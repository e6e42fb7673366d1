//! Integration tests for the `blueprint` binary.

use std::{fs, path::Path};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn blueprint(dest: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("blueprint");
    cmd.current_dir(dest)
        .env_remove("RUST_LOG")
        .args(["--no-color", "--dest"])
        .arg(dest);
    cmd
}

fn answers(dir: &Path, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

/// Greenfield run in `temp`; returns the architecture folder.
fn new_workspace(temp: &TempDir) -> std::path::PathBuf {
    let file = answers(temp.path(), "workspace.json", r#"{ "workspaceName": "Big Bank" }"#);
    blueprint(temp.path())
        .args(["generate", "--answers"])
        .arg(&file)
        .assert()
        .success();
    temp.path().join("architecture")
}

#[test]
fn test_help_flag() {
    cargo::cargo_bin_cmd!("blueprint")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Structurizr"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    cargo::cargo_bin_cmd!("blueprint")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_json() {
    cargo::cargo_bin_cmd!("blueprint")
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Workspace""#))
        .stdout(predicate::str::contains(r#""name":"Software System""#));
}

#[test]
fn test_greenfield_creates_workspace() {
    let temp = TempDir::new().unwrap();
    let folder = new_workspace(&temp);

    let dsl = fs::read_to_string(folder.join("workspace.dsl")).unwrap();
    assert!(dsl.starts_with("workspace \"Big Bank\" \"Architecture of the system\" {"));
    assert!(folder.join("styles.dsl").is_file());
    assert!(folder.join("docs/01-overview.md").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let file = answers(temp.path(), "workspace.json", r#"{ "workspaceName": "Big Bank" }"#);

    blueprint(temp.path())
        .args(["generate", "--dry-run", "--answers"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("would be written architecture/workspace.dsl"));

    assert!(!temp.path().join("architecture").exists());
}

#[test]
fn test_constant_is_appended() {
    let temp = TempDir::new().unwrap();
    let folder = new_workspace(&temp);
    let file = answers(
        temp.path(),
        "constant.json",
        r#"{ "constantName": "MaxRetries", "constantValue": "3" }"#,
    );

    blueprint(temp.path())
        .args(["generate", "constant", "--answers"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("appended workspace.dsl"));

    let dsl = fs::read_to_string(folder.join("workspace.dsl")).unwrap();
    assert!(dsl.contains("    # Constants\n    !const MAX_RETRIES \"3\"\n"));
}

#[test]
fn test_greenfield_then_named_generator() {
    let temp = TempDir::new().unwrap();
    let file = answers(
        temp.path(),
        "answers.json",
        r#"{ "workspaceName": "Big Bank", "constantName": "Version", "constantValue": "1.0" }"#,
    );

    blueprint(temp.path())
        .args(["generate", "Constant", "--answers"])
        .arg(&file)
        .assert()
        .success();

    let dsl = fs::read_to_string(temp.path().join("architecture/workspace.dsl")).unwrap();
    assert!(dsl.contains("!const VERSION \"1.0\""));
}

#[test]
fn test_system_then_container() {
    let temp = TempDir::new().unwrap();
    let folder = new_workspace(&temp);

    let system = answers(
        temp.path(),
        "system.json",
        r#"{ "systemName": "Internet Banking", "systemDescription": "Online banking" }"#,
    );
    blueprint(temp.path())
        .args(["generate", "software system", "--answers"])
        .arg(&system)
        .assert()
        .success();

    let system_dsl = fs::read_to_string(folder.join("systems/internet-banking.dsl")).unwrap();
    assert!(system_dsl.starts_with(
        "internetBanking = softwareSystem \"Internet Banking\" \"Online banking\" {"
    ));
    assert!(folder.join("containers/internet-banking/index.dsl").is_file());
    let workspace_dsl = fs::read_to_string(folder.join("workspace.dsl")).unwrap();
    assert!(workspace_dsl.contains("        # Systems\n        !include systems/internet-banking.dsl\n"));

    let container = answers(
        temp.path(),
        "container.json",
        r#"{ "systemName": "Internet Banking", "containerName": "API Gateway", "containerTechnology": "Rust" }"#,
    );
    blueprint(temp.path())
        .args(["generate", "container", "--answers"])
        .arg(&container)
        .assert()
        .success();

    let container_dsl =
        fs::read_to_string(folder.join("containers/internet-banking/api-gateway.dsl")).unwrap();
    assert_eq!(
        container_dsl,
        "apiGateway = container \"API Gateway\" \"\" \"Rust\"\n"
    );
}

#[test]
fn test_landscape_view_is_appended() {
    let temp = TempDir::new().unwrap();
    let folder = new_workspace(&temp);
    let file = answers(temp.path(), "view.json", r#"{ "viewType": "systemLandscape" }"#);

    blueprint(temp.path())
        .args(["generate", "view", "--answers"])
        .arg(&file)
        .assert()
        .success();

    let dsl = fs::read_to_string(folder.join("workspace.dsl")).unwrap();
    assert!(dsl.contains("        # Views\n        systemLandscape \"Landscape\" {\n"));
}

#[test]
fn test_config_path() {
    cargo::cargo_bin_cmd!("blueprint")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_config_file_sets_destination() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("docs");
    fs::create_dir_all(&target).unwrap();
    let config = temp.path().join("blueprint.toml");
    fs::write(
        &config,
        format!("[defaults]\ndest = {:?}\n", target.display().to_string()),
    )
    .unwrap();
    let file = answers(temp.path(), "workspace.json", r#"{ "workspaceName": "Docs" }"#);

    cargo::cargo_bin_cmd!("blueprint")
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["generate", "--answers"])
        .arg(&file)
        .assert()
        .success();

    assert!(target.join("architecture/workspace.dsl").is_file());
}
