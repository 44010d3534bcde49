//! Search-index preparation.
//!
//! Turns catalog rows into index documents carrying a completion-suggester
//! payload, and encodes them as a bulk request body.

mod bulk;
mod document;
mod keywords;

pub use bulk::{build_bulk, BulkBody, BulkReport};
pub use document::{CompletionInput, IndexDocument, IndexSettings, DEFAULT_SUGGEST_WEIGHT};
pub use keywords::{suggestion_inputs, DEFAULT_MIN_KEYWORD_LEN};
