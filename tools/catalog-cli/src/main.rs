//! Catalog CLI - Prepare catalog data for the storefront and the search index.
//!
//! Commands:
//! - `catalog suggest` - Show the completion inputs derived for a product
//! - `catalog highlight` - Highlight the typed prefix of a suggestion
//! - `catalog products` - Convert catalog rows into storefront products
//! - `catalog index` - Encode catalog rows as a bulk index request body
//! - `catalog config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, HighlightArgs, IndexArgs, ProductsArgs, SuggestArgs};

/// Catalog CLI - Prepare catalog data for the storefront and the search index
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the completion inputs derived for a product
    Suggest(SuggestArgs),

    /// Highlight the typed prefix of a suggestion
    Highlight(HighlightArgs),

    /// Convert catalog rows into storefront products
    Products(ProductsArgs),

    /// Encode catalog rows as a bulk index request body
    Index(IndexArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Suggest(args) => commands::suggest::run(args, &ctx).await,
        Commands::Highlight(args) => commands::highlight::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Index(args) => commands::index::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
