use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// How the scripts folder is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptsMode {
    /// Each required script must exist and contain all of its keywords
    Content,
    /// Only the scripts folder must exist
    Existence,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// TOML that can be saved as a config file
    Toml,
}

#[derive(Parser, Debug)]
#[command(name = "structure-check")]
#[command(author, version, about = "Check a project directory against structure conventions")]
#[command(long_about = "Checks the project in the current directory for required files, \
    required scripts and forbidden paths.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Structure violations found\n  \
    2 - Configuration or filesystem error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file and use the built-in rules
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default check of the current directory
    #[command(flatten)]
    pub check: CheckOptions,
}

impl Cli {
    /// Arguments for a bare invocation, which checks the current directory.
    #[must_use]
    pub fn default_check_args(&self) -> CheckArgs {
        CheckArgs {
            path: None,
            options: self.check.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a project directory (the default when no subcommand is given)
    Check(CheckArgs),

    /// Generate a configuration file containing the built-in rules
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Project root to check (default: current directory)
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub options: CheckOptions,
}

/// Check options shared by the bare invocation and `check`.
///
/// Holds no positional: the top level must keep matching subcommand names
/// after global flags.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckOptions {
    /// Path to configuration file (default: .structure-check.toml in the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How the scripts folder is checked (overrides config)
    #[arg(long, value_enum)]
    pub scripts_mode: Option<ScriptsMode>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".structure-check.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and rules
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".structure-check.toml")]
        config: PathBuf,
    },

    /// Display the effective rules
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
