use assert_cmd::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn tokenparser() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tokenparser"));
    // no config file under the (removed) temp dir, so defaults apply
    let tmp = tempdir().unwrap();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.env_remove("TOKENPARSER_LOG_LEVEL");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_names_each_grammar() {
    tokenparser().args(["check", "[TODAY-2DAY]"]).assert().success().stdout("date\n");
    tokenparser()
        .args(["check", "[END-MAY-2020<->START-MAY-2020]"])
        .assert()
        .success()
        .stdout("range\n");
    tokenparser().args(["check", "[SPECIAL-3]"]).assert().success().stdout("string\n");
}

#[test]
fn check_json_report() {
    let assert = tokenparser().args(["check", "--json", "[ALPHA-5]"]).assert().success();
    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["token"], "[ALPHA-5]");
    assert_eq!(report["date"], false);
    assert_eq!(report["range"], false);
    assert_eq!(report["string"], true);
}

#[test]
fn check_unrecognised_token_fails() {
    tokenparser().args(["check", "[NOPE]"]).assert().code(1).stdout("");
}
