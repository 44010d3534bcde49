//! Highlight markup for suggestion labels.

use serde::{Deserialize, Serialize};

/// Opening and closing tags wrapped around matched text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighlightTags {
    #[serde(default = "default_pre")]
    pub pre: String,
    #[serde(default = "default_post")]
    pub post: String,
}

fn default_pre() -> String {
    "<em>".to_string()
}

fn default_post() -> String {
    "</em>".to_string()
}

impl Default for HighlightTags {
    fn default() -> Self {
        Self {
            pre: default_pre(),
            post: default_post(),
        }
    }
}

impl HighlightTags {
    pub fn new(pre: impl Into<String>, post: impl Into<String>) -> Self {
        Self {
            pre: pre.into(),
            post: post.into(),
        }
    }
}

/// Wrap the completed prefix of a suggestion in highlight tags.
///
/// The prefix is as many characters of `text` as `keyword` has; the text's
/// own casing is kept. A keyword longer than the text wraps all of it.
pub fn highlight_prefix(text: &str, keyword: &str, tags: &HighlightTags) -> String {
    let n = keyword.chars().count();
    let split = text
        .char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (head, tail) = text.split_at(split);

    let mut out = String::with_capacity(text.len() + tags.pre.len() + tags.post.len());
    out.push_str(&tags.pre);
    out.push_str(head);
    out.push_str(&tags.post);
    out.push_str(tail);
    out
}

/// Remove every highlight tag from `text`.
pub fn strip_tags(text: &str, tags: &HighlightTags) -> String {
    let mut out = text.replace(&tags.pre, "");
    if !tags.post.is_empty() {
        out = out.replace(&tags.post, "");
    }
    out
}
