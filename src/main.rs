//! vcxcheck CLI entry point.

use clap::Parser;
use vcxcheck::cli::{self, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check(args) => cli::run_check(&args),
        Commands::Reprioritize(_) => cli::run_reprioritize(),
    };

    std::process::exit(exit_code);
}
