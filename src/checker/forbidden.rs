use std::path::Path;

use walkdir::WalkDir;

use super::Violation;
use crate::error::{Result, StructureCheckError};

/// Walk every directory under `root` (root included) and report each forbidden
/// relative path that exists beneath it.
///
/// The rules are re-applied at every depth, so `config.py` at the root and in
/// `a/b/` yields two violations. Symlinked directories are not descended into.
/// Directories are visited in file-name order; `on_dir` is called for each one.
///
/// # Errors
/// Returns [`StructureCheckError::Walk`] if a directory cannot be read.
pub fn scan_forbidden(
    root: &Path,
    forbidden: &[String],
    mut on_dir: impl FnMut(&Path),
) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();
    if forbidden.is_empty() {
        return Ok(violations);
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.map_err(|source| StructureCheckError::Walk {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        on_dir(dir);

        for element in forbidden {
            let candidate = dir.join(element);
            if candidate.exists() {
                violations.push(Violation::ForbiddenPath { path: candidate });
            }
        }
    }

    Ok(violations)
}

#[cfg(test)]
#[path = "forbidden_tests.rs"]
mod tests;
