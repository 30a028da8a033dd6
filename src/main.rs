//! kitgen CLI
//!
//! Command-line entry point: builds Hydrogen drum kits from sample folders.

use std::process;

use clap::Parser;
use env_logger::Env;
use log::debug;

use kitgen::cli::{commands, Cli, Commands};
use kitgen::Result;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("kitgen v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = handle_command(cli.command) {
        eprintln!("error: {}", err);
        for suggestion in err.recovery_suggestions() {
            eprintln!("  - {}", suggestion);
        }
        debug!("exit on {}", err.error_code());
        process::exit(err.exit_code());
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate { source, output } => {
            commands::generate(&source, output.as_deref()).map(|_| ())
        }
        Commands::Plan { source } => commands::plan(&source).map(|_| ()),
    }
}
