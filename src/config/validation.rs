//! Configuration semantic validation.
//!
//! Runs after parsing. Rule paths are joined onto project directories, so they
//! must be non-empty and relative.

use std::path::{Component, Path};

use crate::config::Config;
use crate::{Result, StructureCheckError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a library name, rule path or script name is empty, or if
/// a rule path is absolute or climbs out of the project with `..`.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_project_section(config)?;
    validate_forbidden_section(config)?;
    validate_required_files(config)?;
    validate_scripts_section(config)?;
    Ok(())
}

fn validate_project_section(config: &Config) -> Result<()> {
    for (i, name) in config.project.library_names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(StructureCheckError::Config(format!(
                "project.library_names[{i}] cannot be empty"
            )));
        }
    }
    Ok(())
}

fn validate_forbidden_section(config: &Config) -> Result<()> {
    for (i, path) in config.forbidden.application.iter().enumerate() {
        validate_relative_path(path, &format!("forbidden.application[{i}]"))?;
    }
    for (i, path) in config.forbidden.shared_library.iter().enumerate() {
        validate_relative_path(path, &format!("forbidden.shared_library[{i}]"))?;
    }
    Ok(())
}

fn validate_required_files(config: &Config) -> Result<()> {
    for (path, message) in &config.required_files {
        validate_relative_path(path, &format!("required_files.\"{path}\""))?;
        if message.trim().is_empty() {
            return Err(StructureCheckError::Config(format!(
                "required_files.\"{path}\": message cannot be empty"
            )));
        }
    }
    Ok(())
}

fn validate_scripts_section(config: &Config) -> Result<()> {
    validate_relative_path(&config.scripts.dir, "scripts.dir")?;

    for (name, keywords) in &config.scripts.required {
        validate_relative_path(name, &format!("scripts.required.\"{name}\""))?;
        if keywords.iter().any(String::is_empty) {
            return Err(StructureCheckError::Config(format!(
                "scripts.required.\"{name}\": keywords cannot be empty strings"
            )));
        }
    }
    Ok(())
}

fn validate_relative_path(path: &str, field: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(StructureCheckError::Config(format!(
            "{field} cannot be empty"
        )));
    }

    let escapes = Path::new(path).components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(StructureCheckError::Config(format!(
            "{field} must be a relative path inside the project, got '{path}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
