mod forbidden;
mod project_type;
mod required;
mod violation;

pub use forbidden::scan_forbidden;
pub use project_type::ProjectType;
pub use required::{check_required_files, check_scripts};
pub use violation::Violation;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Outcome of one run over a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub project_type: ProjectType,
    /// Forbidden paths first, then missing required files, then script violations.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs the classification and rule passes against a project root.
pub struct StructureChecker<'a> {
    config: &'a Config,
}

impl<'a> StructureChecker<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn classify(&self, root: &Path) -> ProjectType {
        ProjectType::classify(root, &self.config.project.library_names)
    }

    /// Check `root` and collect every violation.
    ///
    /// # Errors
    /// Returns an error if the tree cannot be walked or a script cannot be read.
    pub fn check(&self, root: &Path) -> Result<CheckReport> {
        self.check_with_trace(root, |_| {})
    }

    /// Like [`Self::check`], calling `on_dir` for every directory the forbidden scan visits.
    ///
    /// # Errors
    /// Returns an error if the tree cannot be walked or a script cannot be read.
    pub fn check_with_trace(&self, root: &Path, on_dir: impl FnMut(&Path)) -> Result<CheckReport> {
        let project_type = self.classify(root);

        let mut violations =
            scan_forbidden(root, self.config.forbidden.for_type(project_type), on_dir)?;
        violations.extend(check_required_files(root, &self.config.required_files));
        violations.extend(check_scripts(root, &self.config.scripts)?);

        Ok(CheckReport {
            project_type,
            violations,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
