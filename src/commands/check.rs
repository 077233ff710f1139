use crate::checker::StructureChecker;
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::output::{ErrorOutput, TextFormatter};
use crate::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND, Result};

use super::context::{
    color_choice_to_mode, load_config, resolve_project_root, scripts_mode_to_check_mode,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).report(&e);
            EXIT_ERROR
        }
    }
}

/// Runs the structure check and prints the report.
///
/// Returns [`EXIT_SUCCESS`] or [`EXIT_VIOLATIONS_FOUND`]. Filesystem faults abort
/// the run without a partial report.
///
/// # Errors
/// Returns an error if the root or config cannot be loaded, the tree cannot be
/// walked, or a script cannot be read.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
    if !cli.quiet {
        print!("{}", formatter.progress());
    }
    let verbose = if cli.quiet { 0 } else { cli.verbose };

    // 1. Resolve project root and rules
    let root = resolve_project_root(args.path.as_deref())?;
    let loaded = load_config(args.options.config.as_deref(), cli.no_config, &root)?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);

    let checker = StructureChecker::new(&config);
    if verbose >= 1 {
        match &loaded.source {
            Some(path) => eprintln!("Using config: {}", path.display()),
            None => eprintln!("Using built-in rules"),
        }
        eprintln!(
            "Project {} classified as {}",
            root.display(),
            checker.classify(&root)
        );
        eprintln!("Scripts mode: {}", config.scripts.mode);
    }

    // 2. Run every rule pass
    let report = checker.check_with_trace(&root, |dir| {
        if verbose >= 2 {
            eprintln!("Scanning {}", dir.display());
        }
    })?;

    // 3. Report
    print!("{}", formatter.format(&report));

    if report.is_passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS_FOUND)
    }
}

const fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(mode) = args.options.scripts_mode {
        config.scripts.mode = scripts_mode_to_check_mode(mode);
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
