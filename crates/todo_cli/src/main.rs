//! `todo` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the task store.
//! - Map outcomes to exit status: 0 ok, 2 validation, 1 storage/setup.

mod cli;
mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use log::error;
use std::process::ExitCode;
use todo_core::{init_logging, StoreError, TaskStore};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            match err.downcast_ref::<StoreError>() {
                Some(store_err) if store_err.is_validation() => ExitCode::from(2),
                _ => {
                    error!("event=command_failed module=cli status=error error={err:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::resolve(&cli.data_dir, cli.log_level.as_deref())?;

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let store = TaskStore::open(&config.data_dir).with_context(|| {
        format!(
            "cannot open task store in `{}`",
            config.data_dir.display()
        )
    })?;

    let stdout = std::io::stdout();
    let result = commands::execute(&store, &cli.command, &mut stdout.lock());
    let closed = store.close();
    result?;
    closed.context("cannot close task store")?;
    Ok(())
}
