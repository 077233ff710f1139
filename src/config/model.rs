use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::ProjectType;

/// Project classification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Any root path containing one of these names (as a substring) is a shared library.
    #[serde(default = "default_library_names")]
    pub library_names: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            library_names: default_library_names(),
        }
    }
}

/// Relative paths that must not exist anywhere under the project, per project type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenConfig {
    #[serde(default = "default_forbidden_application")]
    pub application: Vec<String>,

    #[serde(default)]
    pub shared_library: Vec<String>,
}

impl Default for ForbiddenConfig {
    fn default() -> Self {
        Self {
            application: default_forbidden_application(),
            shared_library: Vec::new(),
        }
    }
}

impl ForbiddenConfig {
    #[must_use]
    pub fn for_type(&self, project_type: ProjectType) -> &[String] {
        match project_type {
            ProjectType::Application => &self.application,
            ProjectType::SharedLibrary => &self.shared_library,
        }
    }
}

/// How the `scripts` folder is checked.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptCheckMode {
    /// Every required script must exist and contain all of its keywords.
    #[default]
    Content,
    /// Only the scripts folder itself must exist.
    Existence,
}

impl std::fmt::Display for ScriptCheckMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content => f.write_str("content"),
            Self::Existence => f.write_str("existence"),
        }
    }
}

/// Scripts folder rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptsConfig {
    /// Folder name relative to the project root.
    #[serde(default = "default_scripts_dir")]
    pub dir: String,

    #[serde(default)]
    pub mode: ScriptCheckMode,

    /// Script file name -> substrings the script must contain (content mode only).
    #[serde(default = "default_required_scripts")]
    pub required: IndexMap<String, Vec<String>>,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            dir: default_scripts_dir(),
            mode: ScriptCheckMode::default(),
            required: default_required_scripts(),
        }
    }
}

/// Complete rule set for a run. Built once at startup and passed to the checker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub forbidden: ForbiddenConfig,

    /// Required file path -> violation message shown when it is missing.
    #[serde(default = "default_required_files")]
    pub required_files: IndexMap<String, String>,

    #[serde(default)]
    pub scripts: ScriptsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            forbidden: ForbiddenConfig::default(),
            required_files: default_required_files(),
            scripts: ScriptsConfig::default(),
        }
    }
}

const LIBRARY_NAMES: [&str; 5] = [
    "opal-database",
    "opal-auth-backend",
    "opal-shared-utils",
    "opal-global-ui",
    "opal-auth-frontend",
];

const FORBIDDEN_APPLICATION: [&str; 4] = ["static/css", "config.py", "auth.py", "database.py"];

const REQUIRED_FILES: [(&str, &str); 2] = [
    ("README.md", "Each project must have a README.md file."),
    ("gemini.md", "Each project must have a gemini.md file."),
];

const REQUIRED_SCRIPTS: [&str; 4] = [
    "standalone.sh",
    "webapp.sh",
    "webapp_docker.sh",
    "cloud_gcp_deployment.sh",
];

const SCRIPT_KEYWORDS: [&str; 4] = [
    "install dependencies",
    "kill active port",
    "npm install",
    "start server",
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_library_names() -> Vec<String> {
    to_strings(&LIBRARY_NAMES)
}

fn default_forbidden_application() -> Vec<String> {
    to_strings(&FORBIDDEN_APPLICATION)
}

fn default_required_files() -> IndexMap<String, String> {
    REQUIRED_FILES
        .iter()
        .map(|(path, message)| ((*path).to_string(), (*message).to_string()))
        .collect()
}

fn default_scripts_dir() -> String {
    "scripts".to_string()
}

fn default_required_scripts() -> IndexMap<String, Vec<String>> {
    REQUIRED_SCRIPTS
        .iter()
        .map(|name| ((*name).to_string(), to_strings(&SCRIPT_KEYWORDS)))
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
