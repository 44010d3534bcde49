//! Convert catalog rows into storefront products.

use anyhow::{Context as _, Result};
use product_catalog::catalog::Product;

use super::{read_items, ProductsArgs};
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let input = ctx.resolve_path(&args.input);
    let items = read_items(&input)?;

    let products: Vec<Product> = items.into_iter().map(Product::from).collect();
    let json = serde_json::to_string_pretty(&products)?;

    match args.output {
        Some(ref out) => {
            let path = ctx.resolve_path(out);
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write products: {}", path.display()))?;
            ctx.output
                .success(&format!("Wrote {} products to {}", products.len(), path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}
