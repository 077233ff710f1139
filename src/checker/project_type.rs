use std::path::Path;

/// Classification of the checked project, derived from its root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Application,
    SharedLibrary,
}

impl ProjectType {
    /// Classify a project root by name.
    ///
    /// Any root whose path string contains one of `library_names` is a shared
    /// library. This is a plain substring test over the whole path, so
    /// `/src/my-opal-database-fork` and `/opal-database/apps/web` both match
    /// `opal-database`.
    #[must_use]
    pub fn classify(root: &Path, library_names: &[String]) -> Self {
        let path = root.to_string_lossy();
        if library_names
            .iter()
            .any(|name| path.contains(name.as_str()))
        {
            Self::SharedLibrary
        } else {
            Self::Application
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::SharedLibrary => "shared-library",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "project_type_tests.rs"]
mod tests;
