use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("secpass"))
}

fn hash(password: &str) -> String {
    let output = bin()
        .env("SECPASS_PASSWORD", password)
        .arg("hash")
        .arg("--min-iterations")
        .arg("1")
        .arg("--max-iterations")
        .arg("100")
        .output()
        .unwrap();

    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn hash_prints_base64_credential() {
    let stored = hash("pw");

    // 56 packed bytes -> 76 base64 characters
    assert_eq!(stored.len(), 76);
    assert!(
        stored
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
    );
}

#[test]
fn hash_and_verify_roundtrip() {
    let stored = hash("pw");

    bin()
        .env("SECPASS_PASSWORD", "pw")
        .arg("verify")
        .arg(&stored)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("match"));
}

#[test]
fn wrong_password_exits_with_one() {
    let stored = hash("pw");

    bin()
        .env("SECPASS_PASSWORD", "wrong_pw")
        .arg("verify")
        .arg(&stored)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("mismatch"));
}

#[test]
fn password_can_be_piped() {
    let stored = hash("from-stdin");

    bin()
        .env_remove("SECPASS_PASSWORD")
        .arg("verify")
        .arg(&stored)
        .write_stdin("from-stdin\n")
        .assert()
        .success();
}

#[test]
fn empty_password_is_accepted() {
    let stored = hash("");

    bin()
        .env_remove("SECPASS_PASSWORD")
        .arg("verify")
        .arg(&stored)
        .write_stdin("\n")
        .assert()
        .success();
}

#[test]
fn artifact_can_come_from_env() {
    let stored = hash("pw");

    bin()
        .env("SECPASS_PASSWORD", "pw")
        .env("SECPASS_ARTIFACT", &stored)
        .arg("verify")
        .assert()
        .success();
}

#[test]
fn non_base64_credential_is_an_error() {
    bin()
        .env("SECPASS_PASSWORD", "pw")
        .arg("verify")
        .arg("not-base64!!")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid base64"));
}

#[test]
fn short_credential_is_an_error() {
    bin()
        .env("SECPASS_PASSWORD", "pw")
        .arg("verify")
        .arg("c2hvcnQ=")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed credential"));
}

#[test]
fn inverted_iteration_range_fails() {
    bin()
        .env("SECPASS_PASSWORD", "pw")
        .arg("hash")
        .arg("--min-iterations")
        .arg("500")
        .arg("--max-iterations")
        .arg("10")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid iteration range"));
}

#[test]
fn inspect_reports_iterations() {
    let stored = hash("pw");

    bin()
        .arg("inspect")
        .arg(&stored)
        .assert()
        .success()
        .stdout(predicate::str::contains("pbkdf2-hmac-sha1"))
        .stdout(predicate::str::contains("width:       4 bytes"));
}

#[test]
fn inspect_json_output() {
    let stored = hash("pw");

    let output = bin()
        .arg("inspect")
        .arg("--json")
        .arg(&stored)
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let iterations = info["iterations"].as_u64().unwrap();
    assert!((1..=100).contains(&iterations));
    assert_eq!(info["salt"].as_str().unwrap().len(), 64);
    assert!(info.get("key").is_none());
}
