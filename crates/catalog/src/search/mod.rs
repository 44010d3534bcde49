//! Search module.
//!
//! Contains the suggestion shape, highlight markup helpers and the request
//! parameters of the suggestion and search endpoints.

mod highlight;
mod params;
mod suggestion;

pub use highlight::{highlight_prefix, strip_tags, HighlightTags};
pub use params::{SearchParams, SuggestParams, DEFAULT_RESULT_SIZE, MAX_SUGGEST_SIZE};
pub use suggestion::SearchSuggestion;
