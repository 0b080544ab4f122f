use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    let dicts = dir.path().join("dicts");
    fs::create_dir(&dicts).unwrap();
    fs::write(dicts.join("en.aff"), "SET UTF-8\n").unwrap();
    fs::write(dicts.join("en.dic"), "7\nvariable\nthis\na\nof\nbad\ns\nhello\n").unwrap();
    fs::write(
        dir.path().join(".lintspell.toml"),
        "color = false\n\n[[dicts]]\naff = \"dicts/en.aff\"\ndic = \"dicts/en.dic\"\n",
    )
    .unwrap();
    dir
}

fn lintspell(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lintspell").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"))
        .env("XDG_DATA_HOME", dir.join("xdg-data"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_usage_without_file() {
    let dir = workspace();
    lintspell(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: lintspell <file>"));
}

#[test]
fn test_results_sorted_by_line() {
    let dir = workspace();
    fs::write(
        dir.path().join("sample.js"),
        "var variavle = 1;\n//This si a tset\nvar s = \"hello wrld\";\n",
    )
    .unwrap();

    lintspell(dir.path())
        .arg("sample.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking Spelling on: sample.js"))
        .stdout(predicate::str::contains(
            "You have a misspelled Identifier variavle On Line: 1",
        ))
        .stdout(predicate::str::contains(
            "You have a misspelled Comment This si a tset misspelled: tset On Line: 2",
        ))
        .stdout(predicate::str::is_match("(?s)On Line: 1.*On Line: 2.*On Line: 3").unwrap());
}

#[test]
fn test_parse_failure_is_reported() {
    let dir = workspace();
    fs::write(dir.path().join("broken.js"), "#/env/node index.js\n").unwrap();

    lintspell(dir.path())
        .arg("broken.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("Can't check spelling - parser error:"))
        .stdout(predicate::str::contains("On Line: 1"));
}

#[test]
fn test_missing_dictionary_fails() {
    let dir = workspace();
    fs::write(
        dir.path().join(".lintspell.toml"),
        "[[dicts]]\ndic = \"dicts/missing.dic\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("sample.js"), "var variable = 1;\n").unwrap();

    lintspell(dir.path())
        .arg("sample.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.dic"));
}

#[test]
fn test_missing_file_fails() {
    let dir = workspace();
    lintspell(dir.path())
        .arg("nope.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
