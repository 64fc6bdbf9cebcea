use assert_cmd::Command;
use tempfile::TempDir;

fn pinvault_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pinvault").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("PINVAULT_PIN");
    cmd.env_remove("PINVAULT_LOG");
    cmd
}

#[test]
fn test_exit_code_not_found() {
    let home = TempDir::new().unwrap();
    let output = pinvault_cmd(&home).args(["remove", "999999"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let output = pinvault_cmd(&home)
        .args(["update", "999999", "--notes", "x"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let output = pinvault_cmd(&home).args(["show", "999999"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_exit_code_validation() {
    let home = TempDir::new().unwrap();
    let output = pinvault_cmd(&home)
        .args(["pin", "setup", "--pin", "abcd", "--confirm", "abcd"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_exit_code_storage() {
    let home = TempDir::new().unwrap();
    // A regular file where the data directory should be makes every write fail.
    std::fs::write(home.path().join(".pinvault"), "not a directory").unwrap();

    let output = pinvault_cmd(&home)
        .args(["add", "acct"])
        .write_stdin("pw")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Storage error"));
}

#[test]
fn test_corrupt_vault_lists_empty() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".pinvault");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("passwords"), "{{{").unwrap();

    let output = pinvault_cmd(&home).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["credentials"].as_array().unwrap().len(), 0);
}
