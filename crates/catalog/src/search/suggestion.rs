//! Search suggestion shape.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::search::highlight::{highlight_prefix, strip_tags, HighlightTags};

/// A label offered to the user while they type.
///
/// Deserializes from a bare string, `{"text": ..}` or `{"text": .., "id": ..}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawSuggestion")]
pub struct SearchSuggestion {
    /// Label, possibly containing highlight markup.
    pub text: String,
    /// Product the suggestion points at, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSuggestion {
    Text(String),
    Object {
        text: String,
        #[serde(default)]
        id: Option<ProductId>,
    },
}

impl From<RawSuggestion> for SearchSuggestion {
    fn from(raw: RawSuggestion) -> Self {
        match raw {
            RawSuggestion::Text(text) => Self { text, id: None },
            RawSuggestion::Object { text, id } => Self { text, id },
        }
    }
}

impl SearchSuggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Build a suggestion from a completion option, highlighting the part
    /// the user already typed.
    pub fn from_completion(
        option_text: &str,
        keyword: &str,
        id: Option<ProductId>,
        tags: &HighlightTags,
    ) -> Self {
        Self {
            text: highlight_prefix(option_text, keyword, tags),
            id,
        }
    }

    /// Label without the default highlight tags.
    pub fn plain_text(&self) -> String {
        strip_tags(&self.text, &HighlightTags::default())
    }
}
