//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    structure_check!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".structure-check.toml")).unwrap();
    assert!(content.contains("library_names"));
    assert!(content.contains("\"static/css\""));
    assert!(content.contains("mode = \"content\""));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("rules.toml");

    structure_check!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    structure_check!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(fixture.path().join(".structure-check.toml")).unwrap();
    assert_eq!(content, "# existing config\n");
}

#[test]
fn init_force_overwrites_existing_config() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    structure_check!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".structure-check.toml")).unwrap();
    assert!(content.contains("[scripts.required]"));
}

#[test]
fn generated_config_behaves_like_builtin_rules() {
    let fixture = TestFixture::compliant("storefront");
    fixture.create_dir("static/css");

    structure_check!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    let with_config = structure_check!()
        .current_dir(fixture.path())
        .output()
        .unwrap();
    let builtin = structure_check!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .output()
        .unwrap();

    assert_eq!(with_config.status.code(), Some(1));
    assert_eq!(with_config.stdout, builtin.stdout);
}
