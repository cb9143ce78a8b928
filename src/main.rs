use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pos_client::cli::args::{Cli, Commands};
use pos_client::cli::commands;
use pos_client::config::{Config, Overrides, Session};
use pos_client::features::sync::QueueStore;
use pos_client::{logging, HttpBackend};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn resolve_session(overrides: &Overrides) -> Result<Session> {
    let config = Config::load()?;
    Ok(Session::resolve(&config, overrides)?)
}

fn open_queue() -> Result<QueueStore> {
    QueueStore::open().context("cannot open the local sales queue")
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let format = cli.output;
    let overrides = Overrides {
        backend_url: cli.backend_url,
        store_id: cli.store_id,
    };

    let output = match cli.command {
        Commands::Lookup { barcode } => {
            let session = resolve_session(&overrides)?;
            let backend = HttpBackend::new(&session)?;
            commands::lookup(&backend, &barcode, format)?
        }
        Commands::Sell(args) => {
            let session = resolve_session(&overrides)?;
            let backend = HttpBackend::new(&session)?;
            let queue = open_queue()?;
            commands::sell(&backend, &queue, &session, args, format)?
        }
        Commands::Sync => {
            let session = resolve_session(&overrides)?;
            let backend = HttpBackend::new(&session)?;
            let queue = open_queue()?;
            commands::sync(&backend, &queue, format)?
        }
        Commands::Queue(args) => {
            let queue = open_queue()?;
            commands::queue(&queue, args.command, format)?
        }
        Commands::Config(args) => commands::config(args.command, &overrides, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
