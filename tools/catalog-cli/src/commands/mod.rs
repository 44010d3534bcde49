//! CLI command implementations.

pub mod config;
pub mod highlight;
pub mod index;
pub mod products;
pub mod suggest;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use product_catalog::catalog::CatalogItem;

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Product name.
    #[arg(short, long)]
    pub name: String,

    /// Brand name.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Category name.
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum word length (overrides index.min_keyword_len).
    #[arg(long)]
    pub min_len: Option<usize>,
}

/// Arguments for the highlight command.
#[derive(Args)]
pub struct HighlightArgs {
    /// Completion option texts to highlight.
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Prefix the user typed.
    #[arg(short, long)]
    pub keyword: String,

    /// Product id to attach to each suggestion.
    #[arg(long)]
    pub id: Option<u64>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// JSON file holding an array of catalog rows.
    pub input: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the index command.
#[derive(Args)]
pub struct IndexArgs {
    /// JSON file holding an array of catalog rows.
    pub input: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Index name (overrides index.index_name).
    #[arg(long)]
    pub index_name: Option<String>,

    /// Report what would be written without writing it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Read catalog rows from a JSON file.
pub(crate) fn read_items(path: &Path) -> Result<Vec<CatalogItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog rows: {}", path.display()))?;
    let items = CatalogItem::load_many(&content)
        .with_context(|| format!("Failed to parse catalog rows: {}", path.display()))?;
    tracing::info!(rows = items.len(), path = %path.display(), "loaded catalog rows");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "Pen", "price": 150}]"#).unwrap();

        let items = read_items(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pen");
    }

    #[test]
    fn test_read_items_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_items(&dir.path().join("nope.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }
}
