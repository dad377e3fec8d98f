use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eyemotion-quote", version, about = "EyeMotion price quotes")]
pub struct Cli {
    /// Catalog JSON file (defaults to the built-in EyeMotion tables)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a selection and print the breakdown as JSON
    Quote {
        #[arg(long)]
        plan: String,

        #[arg(long, default_value = "global")]
        region: String,

        /// Social program id
        #[arg(long, default_value = "none")]
        program: String,

        #[arg(long, default_value = "usd")]
        currency: String,

        /// monthly or yearly
        #[arg(long, default_value = "monthly")]
        billing: String,

        #[arg(long, default_value_t = 1)]
        team_size: u32,

        /// Individual add-on id (repeatable)
        #[arg(long = "add-on")]
        add_ons: Vec<String>,

        /// Bundle id (replaces any --add-on)
        #[arg(long)]
        bundle: Option<String>,
    },

    /// Catalog tooling
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CatalogCommands {
    /// Print the catalog as JSON
    Show,
    /// Load and validate the catalog
    Validate,
    /// Print the catalog's SHA-256 fingerprint
    Fingerprint,
}
