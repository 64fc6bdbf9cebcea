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

fn add(home: &TempDir, account: &str, password: &str) -> u64 {
    let output = pinvault_cmd(home)
        .args(["add", account, "--json"])
        .write_stdin(password)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["id"].as_u64().unwrap()
}

fn setup_pin(home: &TempDir) {
    pinvault_cmd(home)
        .args(["pin", "setup", "--pin", "1234", "--confirm", "1234"])
        .assert()
        .success();
}

#[test]
fn test_add_creates_slot_file() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["add", "github", "--username", "octocat"])
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Credential 'github' added"));

    let raw = std::fs::read_to_string(home.path().join(".pinvault/passwords")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["account"], "github");
    assert_eq!(json[0]["username"], "octocat");
    // Trailing newline from the pipe is not part of the password.
    assert_eq!(json[0]["password"], "hunter2");
    assert!(json[0].get("email").is_none());
}

#[test]
fn test_list_hides_passwords() {
    let home = TempDir::new().unwrap();
    add(&home, "alpha", "first-secret");
    add(&home, "beta", "second-secret");

    pinvault_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("first-secret").not());
}

#[test]
fn test_list_empty() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No credentials stored"));
}

#[test]
fn test_show_with_pin() {
    let home = TempDir::new().unwrap();
    let id = add(&home, "mail", "m4il-pass");
    setup_pin(&home);

    pinvault_cmd(&home)
        .args(["show", &id.to_string(), "--pin", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("account:  mail"))
        .stdout(predicate::str::contains("password: m4il-pass"));
}

#[test]
fn test_show_pin_from_env() {
    let home = TempDir::new().unwrap();
    let id = add(&home, "mail", "env-pass");
    setup_pin(&home);

    pinvault_cmd(&home)
        .env("PINVAULT_PIN", "1234")
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("password: env-pass"));
}

#[test]
fn test_update_and_remove() {
    let home = TempDir::new().unwrap();
    let id = add(&home, "shop", "old-pass");
    setup_pin(&home);

    pinvault_cmd(&home)
        .args(["update", &id.to_string(), "--notes", "loyalty card", "--password"])
        .write_stdin("new-pass")
        .assert()
        .success()
        .stderr(predicate::str::contains("updated"));

    pinvault_cmd(&home)
        .args(["show", &id.to_string(), "--pin", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes:    loyalty card"))
        .stdout(predicate::str::contains("password: new-pass"));

    pinvault_cmd(&home)
        .args(["remove", &id.to_string()])
        .assert()
        .success()
        .stderr(predicate::str::contains("removed"));

    pinvault_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop").not());
}

#[test]
fn test_update_without_fields_fails() {
    let home = TempDir::new().unwrap();
    let id = add(&home, "shop", "pw");

    pinvault_cmd(&home)
        .args(["update", &id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn test_generate_respects_flags() {
    let home = TempDir::new().unwrap();
    let output = pinvault_cmd(&home)
        .args(["generate", "--length", "20", "--no-uppercase", "--no-lowercase"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let password = String::from_utf8(output.stdout).unwrap();
    let password = password.trim_end();
    assert_eq!(password.len(), 20);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_generate_rejects_long_length() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["generate", "--length", "64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 4 and 32"));
}

#[test]
fn test_add_generated() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["add", "forum", "--generate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Strength:"))
        .stderr(predicate::str::contains("Credential 'forum' added"));
}

#[test]
fn test_add_empty_account_fails() {
    let home = TempDir::new().unwrap();
    pinvault_cmd(&home)
        .args(["add", "  "])
        .write_stdin("pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("account must not be empty"));
}
