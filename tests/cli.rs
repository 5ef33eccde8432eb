//! End-to-end runs of the release_model binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const FIXTURE: &str = include_str!("fixtures/release.toml");

/// Writes the fixture config plus the given build outputs into a tempdir.
fn workspace(files: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("release.toml");
    std::fs::write(&config, FIXTURE).unwrap();
    for file in files {
        let path = dir.path().join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"abc").unwrap();
    }
    (dir, config)
}

fn release_model(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("release_model").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn select_prints_existing_artifacts() {
    let (dir, config) = workspace(&[
        "build/acme-1.2.0-linux-x86_64.zip",
        "build/acme-1.2.0-osx-x86_64.zip",
    ]);
    let expected = format!(
        "{}\n{}\n",
        dir.path().join("build/acme-1.2.0-linux-x86_64.zip").display(),
        dir.path().join("build/acme-1.2.0-osx-x86_64.zip").display()
    );

    release_model(&config)
        .args(["select", "--packager", "brew", "--distribution", "acme"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn candidates_include_missing_files() {
    let (_dir, config) = workspace(&[]);
    release_model(&config)
        .args([
            "select",
            "--packager",
            "brew",
            "--distribution",
            "acme",
            "--candidates",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-1.2.0-linux-x86_64.tar.gz"))
        .stdout(predicate::str::contains("acme-1.2.0-osx-x86_64.zip"));
}

#[test]
fn select_platform_filter() {
    let (_dir, config) = workspace(&[]);
    release_model(&config)
        .args([
            "--select-platform",
            "osx",
            "select",
            "--packager",
            "brew",
            "--distribution",
            "acme",
            "--candidates",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("osx-x86_64.zip"))
        .stdout(predicate::str::contains("linux").not());
}

#[test]
fn checksum_prefixes_paths() {
    let (_dir, config) = workspace(&["build/acme-1.2.0-windows-x86_64.zip"]);
    release_model(&config)
        .args([
            "select",
            "--packager",
            "chocolatey",
            "--distribution",
            "acme",
            "--checksum",
            "sha256",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  ",
        ));
}

#[test]
fn unknown_packager_fails() {
    let (_dir, config) = workspace(&[]);
    release_model(&config)
        .args(["select", "--packager", "npm", "--distribution", "acme"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown packager: npm"));
}

#[test]
fn unknown_distribution_fails() {
    let (_dir, config) = workspace(&[]);
    release_model(&config)
        .args(["select", "--packager", "brew", "--distribution", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("distribution not found: nope"));
}

#[test]
fn show_prints_sparse_json() {
    let (_dir, config) = workspace(&[]);
    release_model(&config)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"formulaName\": \"acme\""))
        .stdout(predicate::str::contains("\"website\"").not());
}

#[test]
fn show_full_keeps_empty_values() {
    let (_dir, config) = workspace(&[]);
    release_model(&config)
        .args(["show", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"website\": null"));
}

#[test]
fn config_is_found_from_working_directory() {
    let (dir, _config) = workspace(&["build/acme-1.2.0-osx-x86_64.zip"]);
    let nested = dir.path().join("nested");
    std::fs::create_dir_all(&nested).unwrap();
    Command::cargo_bin("release_model")
        .unwrap()
        .current_dir(&nested)
        .args(["select", "--packager", "brew", "--distribution", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-1.2.0-osx-x86_64.zip"));
}
