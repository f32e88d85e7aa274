//! Codehop - workspace history and re-opener
//!
//! Records previously opened editor workspaces (local paths, `\\wsl$` UNC
//! paths, or `vscode-remote://` URIs) and reconstructs correct, openable
//! launch targets for them, correcting WSL distribution names against the
//! distributions actually installed on the host.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod history;
mod launch;
mod location;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Open(args) => commands::open::run(&settings, args, cli.verbose),
        Commands::List(args) => commands::list::run(args),
        Commands::Add(args) => commands::add::run(&settings, args),
        Commands::Remove(args) => commands::remove::run(args),
        Commands::Resolve(args) => commands::resolve::run(&settings, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
