//! chordlist CLI - Command-line interface for keyboard-shortcut reminders
//!
//! Record, search, and export the shortcuts you keep forgetting.

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::{resolve_config_path, resolve_store_path};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::encode::run_encode;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::location::{run_relocate, run_where};
use crate::commands::search::run_search;
use crate::commands::suggest::run_suggest;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chordlist=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config_path = resolve_config_path(cli.config_path);
    let store_path = || {
        let path = resolve_store_path(cli.store_path.clone(), &config_path)?;
        tracing::debug!("Using shortcut store at {}", path.display());
        Ok::<_, CliError>(path)
    };

    match command {
        Commands::Add {
            application,
            feature,
            chord,
        } => run_add(&application, &feature, &chord, &store_path()?)?,
        Commands::List { json } => run_list(json, &store_path()?)?,
        Commands::Search { query, scope, json } => {
            run_search(&query, scope.into(), json, &store_path()?)?;
        }
        Commands::Delete { id } => run_delete(&id, &store_path()?)?,
        Commands::Suggest { input } => run_suggest(&input, &store_path()?)?,
        Commands::Encode {
            modifiers,
            key_code,
            chars,
        } => run_encode(&modifiers, key_code, chars.as_deref())?,
        Commands::Relocate { path } => run_relocate(&path, &store_path()?, &config_path)?,
        Commands::Where => run_where(&store_path()?),
        Commands::Export { format, output } => {
            run_export(format, output.as_deref(), &store_path()?)?;
        }
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}
