//! Show the completion inputs derived for a product.

use anyhow::{bail, Result};
use product_catalog::index::{suggestion_inputs, CompletionInput};

use super::SuggestArgs;
use crate::context::Context;

/// Run the suggest command.
pub async fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let min_len = args.min_len.unwrap_or(ctx.config.index.min_keyword_len);
    if min_len == 0 {
        bail!("--min-len must be at least 1");
    }

    let inputs = suggestion_inputs(
        &args.name,
        args.brand.as_deref(),
        args.category.as_deref(),
        min_len,
    );
    let payload = CompletionInput::new(inputs).with_weight(ctx.config.index.weight);

    if ctx.output.is_json() {
        ctx.output.json(&payload);
        return Ok(());
    }

    ctx.output.header(&format!("Completion inputs for '{}'", args.name));
    if payload.input.is_empty() {
        ctx.output.warn("No words long enough to suggest");
    }
    for input in &payload.input {
        ctx.output.list_item(input);
    }
    ctx.output.kv("weight", &payload.weight.to_string());

    Ok(())
}
