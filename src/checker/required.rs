use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::Violation;
use crate::config::{ScriptCheckMode, ScriptsConfig};
use crate::error::{Result, StructureCheckError};

/// Report each required file missing from `root`, using its configured message.
#[must_use]
pub fn check_required_files(root: &Path, required: &IndexMap<String, String>) -> Vec<Violation> {
    required
        .iter()
        .filter(|(file, _)| !root.join(file).exists())
        .map(|(file, message)| Violation::MissingRequiredFile {
            file: file.clone(),
            message: message.clone(),
        })
        .collect()
}

/// Check the scripts folder.
///
/// A missing folder is a single violation and ends the check. In
/// [`ScriptCheckMode::Content`] every configured script must exist and contain
/// each of its keywords; [`ScriptCheckMode::Existence`] stops at the folder.
///
/// # Errors
/// Returns [`StructureCheckError::FileRead`] if a present script cannot be read
/// as UTF-8 text.
pub fn check_scripts(root: &Path, scripts: &ScriptsConfig) -> Result<Vec<Violation>> {
    let scripts_dir = root.join(&scripts.dir);
    if !scripts_dir.exists() {
        return Ok(vec![Violation::MissingScriptsDir {
            dir: scripts.dir.clone(),
        }]);
    }

    if scripts.mode == ScriptCheckMode::Existence {
        return Ok(Vec::new());
    }

    let mut violations = Vec::new();
    for (script, keywords) in &scripts.required {
        let script_path = scripts_dir.join(script);
        if !script_path.exists() {
            violations.push(Violation::MissingScript {
                dir: scripts.dir.clone(),
                script: script.clone(),
            });
            continue;
        }

        let content =
            fs::read_to_string(&script_path).map_err(|source| StructureCheckError::FileRead {
                path: script_path.clone(),
                source,
            })?;
        violations.extend(
            keywords
                .iter()
                .filter(|keyword| !content.contains(keyword.as_str()))
                .map(|keyword| Violation::MissingKeyword {
                    script: script.clone(),
                    keyword: keyword.clone(),
                }),
        );
    }

    Ok(violations)
}

#[cfg(test)]
#[path = "required_tests.rs"]
mod tests;
