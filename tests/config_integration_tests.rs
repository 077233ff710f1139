//! Integration tests for the `config` command and config file handling.

mod common;

use common::TestFixture;
use predicates::prelude::*;

const CUSTOM_CONFIG: &str = r#"
[project]
library_names = ["acme-lib"]

[forbidden]
application = ["secrets.env"]

[required_files]
"LICENSE" = "Every project needs a LICENSE."

[scripts]
dir = "bin"
mode = "existence"
"#;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", CUSTOM_CONFIG);

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "custom.toml"])
        .assert()
        .success();
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("invalid [[[ toml");

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ Config:"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_rejects_escaping_path() {
    let fixture = TestFixture::new();
    fixture.create_config("[forbidden]\napplication = [\"../outside\"]\n");

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("forbidden.application[0]"));
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_builtin_rules() {
    let fixture = TestFixture::new();

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: built-in rules"))
        .stdout(predicate::str::contains("opal-auth-frontend"))
        .stdout(predicate::str::contains("mode = \"content\""));
}

#[test]
fn config_show_local_file_as_toml() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);

    structure_check!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-lib"))
        .stdout(predicate::str::contains("mode = \"existence\""))
        .stdout(predicate::str::contains("opal-database").not());
}

#[test]
fn config_show_no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);

    structure_check!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: built-in rules"));
}

// =============================================================================
// Config-driven checks
// =============================================================================

#[test]
fn custom_rules_replace_builtin_rules() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);
    fixture.create_file("nested/secrets.env", "");

    structure_check!()
        .current_dir(fixture.path())
        .assert()
        .code(1)
        .stdout(format!(
            "Checking structure...\n\
             Structure check failed:\n\
             - Forbidden file/directory found: {}\n\
             - Every project needs a LICENSE.\n\
             - Each project must have a 'bin' folder.\n",
            fixture.display("nested/secrets.env")
        ));
}

#[test]
fn custom_library_names_classify_project() {
    let fixture = TestFixture::named("acme-lib-core");
    fixture.create_config(CUSTOM_CONFIG);
    fixture.create_file("secrets.env", "");
    fixture.create_file("LICENSE", "");
    fixture.create_dir("bin");

    structure_check!()
        .current_dir(fixture.path())
        .assert()
        .success();
}

#[test]
fn explicit_config_path_is_used() {
    let fixture = TestFixture::compliant("storefront");
    let other = TestFixture::new();
    other.create_file("rules.toml", "[scripts]\nmode = \"existence\"\n");
    fixture.remove_file("scripts/webapp_docker.sh");

    structure_check!()
        .current_dir(fixture.path())
        .arg("--config")
        .arg(other.path().join("rules.toml"))
        .assert()
        .success();
}

#[test]
fn malformed_config_aborts_check() {
    let fixture = TestFixture::compliant("storefront");
    fixture.create_config("[scripts]\nmode = \"sometimes\"\n");

    structure_check!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stdout("Checking structure...\n")
        .stderr(predicate::str::contains("✖ Config:"))
        .stderr(predicate::str::contains("--no-config"));
}

#[test]
fn missing_explicit_config_is_error() {
    let fixture = TestFixture::compliant("storefront");

    structure_check!()
        .current_dir(fixture.path())
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}
