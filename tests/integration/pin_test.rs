use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pinvault_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pinvault").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("PINVAULT_PIN");
    cmd.env_remove("PINVAULT_LOG");
    cmd
}

fn add(home: &TempDir) -> String {
    let output = pinvault_cmd(home)
        .args(["add", "bank", "--json"])
        .write_stdin("b4nk")
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["id"].as_u64().unwrap().to_string()
}

#[test]
fn test_pin_status_unconfigured() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["pin", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PIN not configured"));
}

#[test]
fn test_pin_setup_writes_slot() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "4321", "--confirm", "4321"])
        .assert()
        .success()
        .stderr(predicate::str::contains("PIN set"));

    let stored = std::fs::read_to_string(home.path().join(".pinvault/vault_pin")).unwrap();
    assert_eq!(stored, "4321");

    pinvault_cmd(&home)
        .args(["pin", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PIN configured (grace period 5m)"));
}

#[test]
fn test_pin_setup_overwrites() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "1111", "--confirm", "1111"])
        .assert()
        .success();
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "2222", "--confirm", "2222"])
        .assert()
        .success()
        .stderr(predicate::str::contains("PIN replaced"));

    let id = add(&home);
    pinvault_cmd(&home)
        .args(["show", &id, "--pin", "1111"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong PIN"));
}

#[test]
fn test_pin_setup_mismatch() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "1234", "--confirm", "5678"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PINs do not match"));
    assert!(!home.path().join(".pinvault/vault_pin").exists());
}

#[test]
fn test_pin_setup_wrong_length() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "12", "--confirm", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PIN must be 4 digits"));
}

#[test]
fn test_pin_setup_noninteractive_needs_confirm() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .env("PINVAULT_NON_INTERACTIVE", "1")
        .args(["pin", "setup", "--pin", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm is required"));
}

#[test]
fn test_show_without_pin_setup() {
    let home = TempDir::new().unwrap();
    let id = add(&home);
    let output = pinvault_cmd(&home).args(["show", &id]).output().unwrap();
    assert_eq!(output.status.code(), Some(7));
    assert!(String::from_utf8_lossy(&output.stderr).contains("PIN not configured"));
}

#[test]
fn test_show_noninteractive_without_pin() {
    let home = TempDir::new().unwrap();
    let id = add(&home);
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "1234", "--confirm", "1234"])
        .assert()
        .success();

    let output = pinvault_cmd(&home)
        .env("PINVAULT_NON_INTERACTIVE", "1")
        .args(["show", &id])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("PIN verification required"));
}

#[test]
fn test_show_wrong_pin_exit_code() {
    let home = TempDir::new().unwrap();
    let id = add(&home);
    pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "1234", "--confirm", "1234"])
        .assert()
        .success();

    let output = pinvault_cmd(&home)
        .args(["show", &id, "--pin", "9999"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("b4nk"));
}

#[test]
fn test_pin_setup_noninteractive_needs_pin() {
    let home = TempDir::new().unwrap();
    let output = pinvault_cmd(&home)
        .env("PINVAULT_NON_INTERACTIVE", "1")
        .args(["pin", "setup", "--confirm", "1234"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--pin is required"));
    assert!(!home.path().join(".pinvault/vault_pin").exists());
}
