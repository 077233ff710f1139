#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the structure-check binary.
#[macro_export]
macro_rules! structure_check {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("structure-check"))
    };
}

pub const REQUIRED_SCRIPTS: [&str; 4] = [
    "standalone.sh",
    "webapp.sh",
    "webapp_docker.sh",
    "cloud_gcp_deployment.sh",
];

pub const COMPLETE_SCRIPT: &str = "#!/bin/sh\n\
    echo \"install dependencies\"\n\
    npm install\n\
    echo \"kill active port\"\n\
    echo \"start server\"\n";

/// A project directory inside a temp dir.
///
/// The project lives in a named subdirectory so tests control the path that
/// classification sees.
pub struct TestFixture {
    pub dir: TempDir,
    root: PathBuf,
}

impl TestFixture {
    /// Creates an empty project directory named `app`.
    pub fn new() -> Self {
        Self::named("app")
    }

    /// Creates an empty project directory with the given name.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let root = dir.path().join(name);
        fs::create_dir_all(&root).expect("Failed to create project directory");
        let root = dunce::canonicalize(&root).expect("Failed to canonicalize project directory");
        Self { dir, root }
    }

    /// Creates a project that passes every built-in rule.
    pub fn compliant(name: &str) -> Self {
        let fixture = Self::named(name);
        fixture.create_file("README.md", "# Project\n");
        fixture.create_file("gemini.md", "");
        for script in REQUIRED_SCRIPTS {
            fixture.create_file(&format!("scripts/{script}"), COMPLETE_SCRIPT);
        }
        fixture
    }

    /// Creates a file with the given content in the project.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the project.
    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.root.join(relative_path)).expect("Failed to create directory");
    }

    /// Removes a file from the project.
    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.root.join(relative_path)).expect("Failed to remove file");
    }

    /// Writes `.structure-check.toml` in the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".structure-check.toml", content);
    }

    /// Returns the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a project-relative path, as printed in reports.
    pub fn display(&self, relative_path: &str) -> String {
        self.root.join(relative_path).display().to_string()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
