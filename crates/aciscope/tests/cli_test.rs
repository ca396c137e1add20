//! Integration tests for the `aciscope` CLI binary.
//!
//! Argument parsing, help output, shell completions, config handling, and
//! full inventory runs against a mock APIC.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `aciscope` binary with env isolation.
///
/// Clears all `ACISCOPE_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn aciscope_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("aciscope");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ACISCOPE_PROFILE")
        .env_remove("ACISCOPE_CONTROLLER")
        .env_remove("ACISCOPE_USERNAME")
        .env_remove("ACISCOPE_PASSWORD")
        .env_remove("ACISCOPE_POD")
        .env_remove("ACISCOPE_OUTPUT")
        .env_remove("ACISCOPE_INSECURE")
        .env_remove("ACISCOPE_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn imdata(class: &str, items: &[serde_json::Value]) -> serde_json::Value {
    let wrapped: Vec<_> = items
        .iter()
        .map(|attrs| {
            let mut obj = serde_json::Map::new();
            obj.insert(class.to_owned(), json!({ "attributes": attrs }));
            serde_json::Value::Object(obj)
        })
        .collect();
    json!({ "totalCount": wrapped.len().to_string(), "imdata": wrapped })
}

async fn mock(server: &MockServer, verb: &str, url_path: &str, status: u16, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// A mock APIC with a session and one leaf (101) on pod 1.
async fn mock_apic() -> MockServer {
    let server = MockServer::start().await;
    mock(&server, "POST", "/api/aaaLogin.json", 200, imdata("aaaLogin", &[json!({ "token": "tok" })])).await;
    mock(&server, "POST", "/api/aaaLogout.json", 200, imdata("aaaLogout", &[])).await;
    mock(
        &server,
        "GET",
        "/api/node/class/fabricNode.json",
        200,
        imdata("fabricNode", &[json!({ "id": "101", "role": "leaf" })]),
    )
    .await;
    server
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(home: &TempDir, server: &MockServer, args: &[&str]) -> std::process::Output {
    let mut cmd = aciscope_cmd(home);
    cmd.args(["--controller", &server.uri(), "--username", "admin", "--password", "secret"])
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = TempDir::new().unwrap();
    let output = aciscope_cmd(&home).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home).arg("--help").assert().success().stdout(
        predicate::str::contains("ACI fabric")
            .and(predicate::str::contains("optics"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aciscope"));
}

#[test]
fn test_inventory_alias_accepted() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["inventory", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--switch").and(predicate::str::contains("--interface")));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_zsh() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_error_policy() {
    let home = TempDir::new().unwrap();
    let output = aciscope_cmd(&home)
        .args(["optics", "--error-policy", "sometimes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_optics_without_config() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .arg("optics")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No APIC configured"));
}

#[test]
fn test_optics_without_credentials() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["optics", "--controller", "https://apic1.example.net"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No credentials"));
}

#[test]
fn test_unknown_profile() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["optics", "--profile", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'nope' not found"));
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path_under_config_home() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_use_and_show() {
    let home = TempDir::new().unwrap();

    aciscope_cmd(&home)
        .args(["config", "set", "controller", "https://apic1.example.net", "--profile", "lab"])
        .assert()
        .success();
    aciscope_cmd(&home)
        .args(["config", "set", "pod", "2", "--profile", "lab"])
        .assert()
        .success();
    aciscope_cmd(&home).args(["config", "use", "lab"]).assert().success();

    aciscope_cmd(&home)
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lab *"));
    aciscope_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[profiles.lab]")
                .and(predicate::str::contains("pod = 2"))
                .and(predicate::str::contains("default_profile = \"lab\"")),
        );
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    aciscope_cmd(&home)
        .args(["config", "set", "site", "default"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

/// Write `contents` where the binary looks for its config file.
fn write_config(home: &TempDir, contents: &str) -> std::path::PathBuf {
    let dir = home.path().join(".config").join("aciscope");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

const MALFORMED_CONFIG: &str = r#"default_profile = "lab"

[defaults]
error_policy = "besteffort"

[profiles.lab]
controller = "https://apic1.example.net"
username = "admin"
"#;

#[test]
fn test_config_set_leaves_malformed_file_alone() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, MALFORMED_CONFIG);

    aciscope_cmd(&home)
        .args(["config", "set", "timeout", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config loading failed"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), MALFORMED_CONFIG);
}

#[test]
fn test_optics_reports_malformed_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, MALFORMED_CONFIG);

    let output = aciscope_cmd(&home).arg("optics").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config loading failed"), "{stderr}");
    assert!(!stderr.contains("No APIC configured"), "{stderr}");
}

// ── Inventory runs against a mock APIC ──────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_optics_table_report() {
    let home = TempDir::new().unwrap();
    let server = mock_apic().await;
    mock(
        &server,
        "GET",
        "/api/node/class/topology/pod-1/node-101/l1PhysIf.json",
        200,
        imdata("l1PhysIf", &[json!({ "id": "eth1/1" })]),
    )
    .await;
    mock(
        &server,
        "GET",
        "/api/node/mo/topology/pod-1/node-101/sys/phys-[eth1/1]/phys.json",
        200,
        imdata("ethpmFcot", &[json!({ "typeName": "SFP-10G-SR" })]),
    )
    .await;
    mock(
        &server,
        "GET",
        "/api/node/mo/topology/pod-1/node-101/sys/lldp/inst/if-[eth1/1].json",
        200,
        imdata("lldpAdjEp", &[json!({ "sysName": "spine201", "portIdV": "" })]),
    )
    .await;

    let output = run(&home, &server, &["optics"]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cell in ["Switch", "LLDP Neighbor", "101", "eth1/1", "SFP-10G-SR", "spine201", "--"] {
        assert!(stdout.contains(cell), "missing {cell}:\n{stdout}");
    }
    assert!(stdout.ends_with("\n\n"), "expected trailing blank line:\n{stdout:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_optics_no_rows_prints_nothing() {
    let home = TempDir::new().unwrap();
    let server = mock_apic().await;

    // Explicit interface: no interface listing; empty optics and LLDP.
    mock(
        &server,
        "GET",
        "/api/node/mo/topology/pod-1/node-101/sys/phys-[eth1/1]/phys.json",
        200,
        imdata("ethpmFcot", &[]),
    )
    .await;
    mock(
        &server,
        "GET",
        "/api/node/mo/topology/pod-1/node-101/sys/lldp/inst/if-[eth1/1].json",
        200,
        imdata("lldpAdjEp", &[]),
    )
    .await;

    let output = run(&home, &server, &["optics", "--interface", "eth1/1"]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(output.stdout.is_empty(), "{}", String::from_utf8_lossy(&output.stdout));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_optics_query_failure_shows_body() {
    let home = TempDir::new().unwrap();
    let server = mock_apic().await;
    Mock::given(method("GET"))
        .and(path("/api/node/class/topology/pod-1/node-101/l1PhysIf.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("node 101 unreachable"))
        .mount(&server)
        .await;

    let output = run(&home, &server, &["optics"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not collect interface list for switch 101"), "{stderr}");
    assert!(stderr.contains("node 101 unreachable"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_optics_best_effort_reports_skipped() {
    let home = TempDir::new().unwrap();
    let server = mock_apic().await;
    mock(
        &server,
        "GET",
        "/api/node/class/topology/pod-1/node-101/l1PhysIf.json",
        500,
        json!({ "totalCount": "1", "imdata": [{ "error": { "attributes": { "text": "boom" } } }] }),
    )
    .await;

    let output = run(
        &home,
        &server,
        &["optics", "--error-policy", "best-effort", "--output", "json"],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipped 1 unit(s)"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_optics_login_rejected() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mock(
        &server,
        "POST",
        "/api/aaaLogin.json",
        401,
        json!({ "totalCount": "1", "imdata": [{ "error": { "attributes": { "text": "User credential is incorrect" } } }] }),
    )
    .await;

    let output = run(&home, &server, &["optics"]).await;

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("User credential is incorrect"), "{stderr}");
}
