//! Highlight the typed prefix of completion options.

use anyhow::Result;
use product_catalog::search::{HighlightTags, SearchSuggestion, SuggestParams};
use product_catalog::ProductId;

use super::HighlightArgs;
use crate::context::Context;

/// Run the highlight command.
pub async fn run(args: HighlightArgs, ctx: &Context) -> Result<()> {
    let params = SuggestParams::new(args.keyword)?.with_size(ctx.config.suggest.size)?;
    let tags = ctx.config.suggest.tags();
    let id = args.id.map(ProductId::new);

    let (suggestions, available) = collect_suggestions(&args.texts, &params, id, &tags);

    if available > suggestions.len() {
        ctx.output.warn(&format!(
            "Only the first {} of {} options are kept (suggest.size)",
            suggestions.len(),
            available
        ));
    }

    if ctx.output.is_json() {
        ctx.output.json(&suggestions);
        return Ok(());
    }

    for suggestion in &suggestions {
        println!("{}", suggestion.text);
    }

    Ok(())
}

/// Highlight options in order, dropping repeats when `skip_duplicates` is set
/// and keeping at most `params.size`. Also returns how many options survived
/// deduplication before the cap.
fn collect_suggestions(
    texts: &[String],
    params: &SuggestParams,
    id: Option<ProductId>,
    tags: &HighlightTags,
) -> (Vec<SearchSuggestion>, usize) {
    let mut seen: Vec<&str> = Vec::new();
    let mut suggestions = Vec::new();
    let mut available = 0;

    for text in texts {
        if params.skip_duplicates && seen.contains(&text.as_str()) {
            continue;
        }
        seen.push(text.as_str());
        available += 1;

        if suggestions.len() < params.size {
            suggestions.push(SearchSuggestion::from_completion(text, &params.keyword, id, tags));
        }
    }

    (suggestions, available)
}
