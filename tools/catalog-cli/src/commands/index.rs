//! Encode catalog rows as a bulk index request body.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context as _, Result};
use product_catalog::index::build_bulk;

use super::{read_items, IndexArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the index command.
pub async fn run(args: IndexArgs, ctx: &Context) -> Result<()> {
    let mut settings = ctx.config.index.clone();
    if let Some(name) = args.index_name {
        settings.index_name = name;
    }

    let input = ctx.resolve_path(&args.input);
    let items = read_items(&input)?;

    ctx.output.header(&format!("Encoding {} rows for index '{}'", items.len(), settings.index_name));

    let pb = ctx.output.progress(items.len() as u64, "encoding");
    let (body, report) = build_bulk(&items, &settings, |_| pb.inc(1))?;
    pb.finish_and_clear();

    if report.skipped > 0 {
        ctx.output
            .warn(&format!("Skipped {} of {} rows", report.skipped, report.total()));
    }

    if args.dry_run {
        ctx.output.info("Dry run: nothing written");
        ctx.output.kv("documents", &report.indexed.to_string());
        ctx.output.kv("size", &format_bytes(body.as_str().len() as u64));
        return Ok(());
    }

    match args.output {
        Some(ref out) => {
            let path = ctx.resolve_path(out);
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            body.write_to(BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!(
                "Wrote {} documents ({}) to {}",
                report.indexed,
                format_bytes(body.as_str().len() as u64),
                path.display()
            ));
        }
        None => body
            .write_to(std::io::stdout().lock())
            .context("Failed to write bulk body to stdout")?,
    }

    Ok(())
}
