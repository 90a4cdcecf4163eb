//! Kinship CLI - Command-line interface for the kinship resolver.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::{Cli, Command, Config, Formatter};
use kinship_domain::Scope;
use kinship_store::SqliteStore;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so table/JSON output stays clean)
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let color_enabled = !cli.no_color;
    if let Err(e) = run(cli) {
        let formatter = Formatter::new(kinship_cli::config::OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> kinship_cli::Result<()> {
    // Load config; an explicit path must parse, the default one may be absent
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let database = cli.database.unwrap_or_else(|| config.database.clone());
    if let Some(parent) = Path::new(&database).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut store = SqliteStore::new(&database)?;
    let scope = Scope::new(cli.scope.unwrap_or_else(|| config.default_scope.clone()));
    tracing::debug!("Using database {} and scope '{}'", database, scope);

    match cli.command {
        Command::Member(args) => commands::execute_member(args, &mut store, &formatter)?,
        Command::Relate(args) => commands::execute_relate(args, &mut store, &scope, &formatter)?,
        Command::Unrelate(args) => commands::execute_unrelate(args, &mut store, &scope, &formatter)?,
        Command::Edges => commands::execute_edges(&store, &scope, &formatter)?,
        Command::Label(args) => {
            commands::execute_label(args, &store, &scope, &config.resolver, &formatter)?
        }
        Command::Roster(args) => {
            commands::execute_roster(args, &store, &scope, &config.resolver, &formatter)?
        }
    }

    Ok(())
}
