//! rFranklin library root.
//! Exposes the exercise store, the workflow controller, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::New => commands::new::handle(&cli.command, cfg),
        Commands::Remove { .. } => commands::remove::handle(&cli.command, cfg),
        Commands::List => commands::list::handle(&cli.command, cfg),
        Commands::Select { .. } => commands::select::handle(&cli.command, cfg),
        Commands::Step { .. } => commands::step::handle(&cli.command, cfg),
        Commands::Show => commands::show::handle(&cli.command, cfg),
        Commands::Set { .. } => commands::set::handle(&cli.command, cfg),
        Commands::Jumble { .. } | Commands::Reveal => {
            commands::jumble::handle(&cli.command, cfg)
        }
        Commands::Complete { .. } => commands::complete::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
