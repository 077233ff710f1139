use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access project root: {path}")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StructureCheckError {
    /// Short category label used as the diagnostic headline.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::ProjectRoot { .. } => "ProjectRoot",
            Self::FileRead { .. } => "FileRead",
            Self::Walk { .. } => "Walk",
            Self::Io(_) => "IO",
            Self::TomlSerialize(_) => "Serialize",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::ProjectRoot { path, .. }
            | Self::FileRead { path, .. }
            | Self::Walk { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::TomlSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ProjectRoot { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::Walk { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e.span().map(|span| format!("at byte offset {}", span.start)),
            Self::Config(_) | Self::Io(_) | Self::TomlSerialize(_) => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run with --no-config to use built-in rules")
            }
            Self::ProjectRoot { source, .. } | Self::FileRead { source, .. } => {
                io_suggestion(source.kind())
            }
            Self::Walk { source, .. } => source.io_error().and_then(|e| io_suggestion(e.kind())),
            Self::Io(e) => io_suggestion(e.kind()),
            Self::TomlSerialize(_) => None,
        }
    }
}

const fn io_suggestion(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::NotFound => Some("Check that the file path exists"),
        ErrorKind::PermissionDenied => Some("Check file permissions for the project directory"),
        ErrorKind::InvalidData => Some("Scripts must be valid UTF-8 text"),
        ErrorKind::IsADirectory => Some("A directory exists where a file is expected"),
        ErrorKind::NotADirectory => Some("The project root must be a directory"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, StructureCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
