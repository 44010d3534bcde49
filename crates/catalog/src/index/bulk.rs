//! Bulk request body encoding.
//!
//! The body is newline-delimited JSON: an action line naming the index and
//! document id, followed by the document source. Every line, including the
//! last, ends with `\n`.

use std::io::Write;

use serde_json::json;

use crate::catalog::CatalogItem;
use crate::error::Result;
use crate::index::{IndexDocument, IndexSettings};

/// Accumulated bulk request body.
#[derive(Debug, Clone, Default)]
pub struct BulkBody {
    buf: String,
    docs: usize,
}

impl BulkBody {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an index action for a document.
    pub fn push(&mut self, doc: &IndexDocument, settings: &IndexSettings) -> Result<()> {
        let action = json!({
            "index": {
                "_index": settings.index_name,
                "_id": doc.id.to_string(),
            }
        });
        let source = doc.to_source(settings)?;

        // Serialize both lines before touching the buffer so a failure
        // leaves the body unchanged.
        let action = serde_json::to_string(&action)?;
        let source = serde_json::to_string(&source)?;

        self.buf.push_str(&action);
        self.buf.push('\n');
        self.buf.push_str(&source);
        self.buf.push('\n');
        self.docs += 1;
        Ok(())
    }

    /// Number of documents in the body.
    pub fn len(&self) -> usize {
        self.docs
    }

    pub fn is_empty(&self) -> bool {
        self.docs == 0
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Write the body to a sink.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.buf.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Outcome of a bulk build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// Documents written to the body.
    pub indexed: usize,
    /// Rows left out.
    pub skipped: usize,
}

impl BulkReport {
    pub fn total(&self) -> usize {
        self.indexed + self.skipped
    }
}

/// Build a bulk body for a batch of catalog rows.
///
/// A row that cannot be encoded, or that has a blank name, is logged and
/// skipped; the rest of the batch still goes through. `on_row` is called once
/// per row processed, skipped or not.
pub fn build_bulk<F>(
    items: &[CatalogItem],
    settings: &IndexSettings,
    mut on_row: F,
) -> Result<(BulkBody, BulkReport)>
where
    F: FnMut(&CatalogItem),
{
    settings.validate()?;
    tracing::info!(rows = items.len(), index = %settings.index_name, "building bulk body");

    let mut body = BulkBody::new();
    let mut report = BulkReport::default();

    for item in items {
        on_row(item);

        if item.name.trim().is_empty() {
            tracing::warn!(id = %item.id, "skipping row with blank name");
            report.skipped += 1;
            continue;
        }

        let doc = IndexDocument::from_item(item, settings);
        match body.push(&doc, settings) {
            Ok(()) => {
                tracing::debug!(id = %item.id, inputs = doc.suggest_keywords.input.len(), "encoded document");
                report.indexed += 1;
            }
            Err(e) => {
                tracing::error!(id = %item.id, error = %e, "failed to encode document");
                report.skipped += 1;
            }
        }
    }

    tracing::info!(indexed = report.indexed, skipped = report.skipped, "bulk body ready");
    Ok((body, report))
}
