//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use product_catalog::index::IndexSettings;
use product_catalog::search::{HighlightTags, DEFAULT_RESULT_SIZE, MAX_SUGGEST_SIZE};
use serde::{Deserialize, Serialize};

/// Config file names looked up from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Index document settings.
    #[serde(default)]
    pub index: IndexSettings,

    /// Suggestion settings.
    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Collect problems with the configuration. Errors first, then warnings.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(e) = self.index.validate() {
            errors.push(e.to_string());
        }

        if self.suggest.size == 0 || self.suggest.size > MAX_SUGGEST_SIZE {
            errors.push(format!("suggest.size must be 1-{}", MAX_SUGGEST_SIZE));
        }

        if self.suggest.pre_tag.is_empty() {
            warnings.push("suggest.pre_tag is empty; suggestions will not be highlighted".to_string());
        }

        if self.suggest.pre_tag.is_empty() != self.suggest.post_tag.is_empty() {
            warnings.push("suggest.pre_tag and suggest.post_tag should be set together".to_string());
        }

        if self.index.weight == 0 {
            warnings.push("index.weight is 0; suggestions will rank last".to_string());
        }

        (errors, warnings)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Suggestion settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestConfig {
    /// Maximum number of suggestions.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Tag opened before the typed prefix.
    #[serde(default = "default_pre_tag")]
    pub pre_tag: String,

    /// Tag closed after the typed prefix.
    #[serde(default = "default_post_tag")]
    pub post_tag: String,
}

fn default_size() -> usize {
    DEFAULT_RESULT_SIZE
}

fn default_pre_tag() -> String {
    HighlightTags::default().pre
}

fn default_post_tag() -> String {
    HighlightTags::default().post
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            pre_tag: default_pre_tag(),
            post_tag: default_post_tag(),
        }
    }
}

impl SuggestConfig {
    /// Highlight tags configured for suggestions.
    pub fn tags(&self) -> HighlightTags {
        HighlightTags::new(self.pre_tag.clone(), self.post_tag.clone())
    }
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    r#"# Catalog tool configuration

[index]
index_name = "item"
suggest_field = "suggest_keywords"
weight = 10
min_keyword_len = 2

[suggest]
size = 10
pre_tag = "<em>"
post_tag = "</em>"
"#
    .to_string()
}
