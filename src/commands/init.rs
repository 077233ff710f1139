use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::ErrorOutput;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result, StructureCheckError};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).report(&e);
            EXIT_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StructureCheckError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Config template spelling out the built-in rules.
#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# structure-check configuration file
# Any section left out falls back to the built-in rules.

[project]
# A project whose path contains one of these names (anywhere, as a substring)
# is a shared library; everything else is an application.
library_names = [
    "opal-database",
    "opal-auth-backend",
    "opal-shared-utils",
    "opal-global-ui",
    "opal-auth-frontend",
]

[forbidden]
# Relative paths that must not exist under ANY directory of the project.
application = ["static/css", "config.py", "auth.py", "database.py"]
shared_library = []

[required_files]
# File (relative to the project root) = message shown when it is missing
"README.md" = "Each project must have a README.md file."
"gemini.md" = "Each project must have a gemini.md file."

[scripts]
# Folder that must exist in the project root
dir = "scripts"
# "content":   every script below must exist and contain all of its keywords
# "existence": only the folder itself must exist
mode = "content"

[scripts.required]
"standalone.sh" = ["install dependencies", "kill active port", "npm install", "start server"]
"webapp.sh" = ["install dependencies", "kill active port", "npm install", "start server"]
"webapp_docker.sh" = ["install dependencies", "kill active port", "npm install", "start server"]
"cloud_gcp_deployment.sh" = ["install dependencies", "kill active port", "npm install", "start server"]
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
