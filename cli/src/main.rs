use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{CatalogCommands, Commands};

/// Logs go to stderr so stdout stays machine-readable JSON
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing();

    let catalog = commands::load_catalog(args.catalog.as_deref())?;

    match args.command {
        Commands::Quote {
            plan,
            region,
            program,
            currency,
            billing,
            team_size,
            add_ons,
            bundle,
        } => commands::quote(
            catalog,
            commands::QuoteArgs {
                plan,
                region,
                program,
                currency,
                billing,
                team_size,
                add_ons,
                bundle,
            },
        )?,
        Commands::Catalog { action } => match action {
            CatalogCommands::Show => commands::show(&catalog)?,
            CatalogCommands::Validate => commands::validate(&catalog)?,
            CatalogCommands::Fingerprint => commands::print_fingerprint(&catalog)?,
        },
    }

    Ok(())
}
