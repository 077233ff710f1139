use std::fmt;
use std::path::PathBuf;

/// A single rule breach found during a run.
///
/// Each variant renders to exactly one line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A forbidden relative path exists under some directory of the project.
    ForbiddenPath { path: PathBuf },
    /// A required file is missing; carries the configured message verbatim.
    MissingRequiredFile { file: String, message: String },
    /// The scripts folder itself is missing.
    MissingScriptsDir { dir: String },
    /// A required script is missing from the scripts folder.
    MissingScript { dir: String, script: String },
    /// A required script exists but lacks a keyword.
    MissingKeyword { script: String, keyword: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForbiddenPath { path } => {
                write!(f, "Forbidden file/directory found: {}", path.display())
            }
            Self::MissingRequiredFile { message, .. } => f.write_str(message),
            Self::MissingScriptsDir { dir } => {
                write!(f, "Each project must have a '{dir}' folder.")
            }
            Self::MissingScript { dir, script } => {
                write!(f, "Missing required script: {dir}/{script}")
            }
            Self::MissingKeyword { script, keyword } => {
                write!(f, "Script {script} is missing required keyword: '{keyword}'")
            }
        }
    }
}
