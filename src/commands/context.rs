use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::cli::{ColorChoice, ScriptsMode};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult, ScriptCheckMode};
use crate::output::ColorMode;
use crate::{Result, StructureCheckError};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub const fn scripts_mode_to_check_mode(mode: ScriptsMode) -> ScriptCheckMode {
    match mode {
        ScriptsMode::Content => ScriptCheckMode::Content,
        ScriptsMode::Existence => ScriptCheckMode::Existence,
    }
}

/// Resolve the project root to an absolute directory path.
///
/// With no path this is the current working directory. The result is
/// canonicalized, so classification sees the real directory name.
///
/// # Errors
/// Returns [`StructureCheckError::ProjectRoot`] if the path does not exist or is not a directory.
pub fn resolve_project_root(path: Option<&Path>) -> Result<PathBuf> {
    let requested = path.unwrap_or_else(|| Path::new("."));
    let root = dunce::canonicalize(requested).map_err(|source| StructureCheckError::ProjectRoot {
        path: requested.to_path_buf(),
        source,
    })?;

    if !root.is_dir() {
        return Err(StructureCheckError::ProjectRoot {
            path: root,
            source: Error::new(ErrorKind::NotADirectory, "not a directory"),
        });
    }
    Ok(root)
}

/// Load the rules for a run.
///
/// `--no-config` wins over everything; an explicit path must exist; otherwise
/// `.structure-check.toml` is looked up in the project root.
///
/// # Errors
/// Returns an error if a config file is missing, unreadable or invalid.
pub fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
    project_root: &Path,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::builtin());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(
        || loader.load(project_root),
        |path| loader.load_from_path(path),
    )
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
