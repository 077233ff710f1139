use clap::Parser;

use structure_check::cli::{Cli, Commands};
use structure_check::commands::{run_check, run_config, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        None => run_check(&cli.default_check_args(), &cli),
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
