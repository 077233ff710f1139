use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config, resolve_project_root};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let color = color_choice_to_mode(cli.color);
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, color),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config, color)
        }
    }
}

fn run_config_validate(config_path: &Path, color: ColorMode) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color).report(&e);
            EXIT_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
    color: ColorMode,
) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color).report(&e);
            EXIT_ERROR
        }
    }
}

/// Renders the effective rules for the current directory.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let root = resolve_project_root(None)?;
    let loaded = load_config(config_path, no_config, &root)?;

    match format {
        ConfigOutputFormat::Toml => Ok(toml::to_string_pretty(&loaded.config)?),
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config: &Config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "Source: {}", path.display());
        }
        None => output.push_str("Source: built-in rules\n"),
    }

    output.push_str("\n[project]\n");
    let _ = writeln!(
        output,
        "  library_names = {:?}",
        config.project.library_names
    );

    output.push_str("\n[forbidden]\n");
    let _ = writeln!(output, "  application = {:?}", config.forbidden.application);
    let _ = writeln!(
        output,
        "  shared_library = {:?}",
        config.forbidden.shared_library
    );

    if !config.required_files.is_empty() {
        output.push_str("\n[required_files]\n");
        for (file, message) in &config.required_files {
            let _ = writeln!(output, "  {file:?} = {message:?}");
        }
    }

    output.push_str("\n[scripts]\n");
    let _ = writeln!(output, "  dir = {:?}", config.scripts.dir);
    let _ = writeln!(output, "  mode = \"{}\"", config.scripts.mode);
    for (script, keywords) in &config.scripts.required {
        let _ = writeln!(output, "  {script:?} = {keywords:?}");
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
