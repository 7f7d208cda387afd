//! Catalog CLI
//!
//! Validates and inspects a content set stored as `{storage_dir}/catalog.json`.

use std::path::{Path, PathBuf};

use catalog::{
    catalog::Catalog,
    config::{load_catalog, load_config},
    error::Result,
    models::{Category, Config},
    pipeline,
    utils,
};
use clap::{Parser, Subcommand};

/// Static content catalog
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about = "Static content catalog")]
struct Cli {
    /// Path to storage directory containing config.toml and the records file
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate configuration and records
    Validate,

    /// Show record counts and the content fingerprint
    Info,

    /// Print one record as JSON
    Get {
        /// Record slug
        id: String,
    },

    /// List records related to a record
    Related {
        /// Record slug
        id: String,

        /// Maximum number of results (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List records
    List {
        /// Only records in this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Keyword search over titles, descriptions and themes
    Search {
        /// Query words
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Write the keyword index as JSON
    Index {
        /// Output path (default: {storage_dir}/index.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the active navigation trail for a route
    Nav {
        /// Route path, e.g. /en/theology/salvation
        path: String,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Validate config, then load the catalog it points at. Load errors are fatal.
async fn open(config: &Config, storage_dir: &Path) -> Result<Catalog> {
    config.validate()?;
    load_catalog(config, storage_dir).await
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli.storage_dir);
    utils::log::init(if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    });

    log::debug!("Using storage directory {}", cli.storage_dir.display());

    match cli.command {
        Command::Validate => pipeline::run_validate(&cli.storage_dir).await?,
        Command::Nav { path } => {
            config.validate()?;
            pipeline::run_nav(&config, &path);
        }
        Command::Info => pipeline::run_info(&open(&config, &cli.storage_dir).await?),
        Command::Get { id } => pipeline::run_get(&open(&config, &cli.storage_dir).await?, &id)?,
        Command::Related { id, limit } => {
            let catalog = open(&config, &cli.storage_dir).await?;
            pipeline::run_related(&catalog, &id, limit)?;
        }
        Command::List { category } => {
            pipeline::run_list(&open(&config, &cli.storage_dir).await?, category)
        }
        Command::Search { query } => {
            let catalog = open(&config, &cli.storage_dir).await?;
            pipeline::run_search(&catalog, &query.join(" "));
        }
        Command::Index { output } => {
            let catalog = open(&config, &cli.storage_dir).await?;
            let output = output.unwrap_or_else(|| cli.storage_dir.join("index.json"));
            pipeline::run_export_index(&catalog, &output).await?;
        }
    }

    Ok(())
}
