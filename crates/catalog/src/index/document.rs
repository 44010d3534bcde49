//! Index documents and their completion payload.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::error::{CatalogError, Result};
use crate::ids::ProductId;
use crate::index::keywords::{suggestion_inputs, DEFAULT_MIN_KEYWORD_LEN};

/// Weight given to every completion input.
pub const DEFAULT_SUGGEST_WEIGHT: u32 = 10;

/// Completion-suggester field value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionInput {
    /// Phrases the suggester completes on.
    pub input: Vec<String>,
    /// Ranking weight.
    pub weight: u32,
}

impl CompletionInput {
    pub fn new(input: Vec<String>) -> Self {
        Self {
            input,
            weight: DEFAULT_SUGGEST_WEIGHT,
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

/// Settings that shape index documents and bulk bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexSettings {
    /// Target index name.
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Name of the completion field in the index mapping.
    #[serde(default = "default_suggest_field")]
    pub suggest_field: String,

    /// Weight applied to completion inputs.
    #[serde(default = "default_weight")]
    pub weight: u32,

    /// Minimum word length kept from product names.
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,
}

fn default_index_name() -> String {
    "item".to_string()
}

fn default_suggest_field() -> String {
    "suggest_keywords".to_string()
}

fn default_weight() -> u32 {
    DEFAULT_SUGGEST_WEIGHT
}

fn default_min_keyword_len() -> usize {
    DEFAULT_MIN_KEYWORD_LEN
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            index_name: default_index_name(),
            suggest_field: default_suggest_field(),
            weight: default_weight(),
            min_keyword_len: default_min_keyword_len(),
        }
    }
}

impl IndexSettings {
    /// Check the settings can produce a usable document.
    pub fn validate(&self) -> Result<()> {
        if self.index_name.trim().is_empty() {
            return Err(CatalogError::InvalidSettings("index_name is required".to_string()));
        }
        if self.index_name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(CatalogError::InvalidSettings(format!(
                "index_name '{}' must be lowercase",
                self.index_name
            )));
        }
        if self.suggest_field.trim().is_empty() {
            return Err(CatalogError::InvalidSettings("suggest_field is required".to_string()));
        }
        if self.min_keyword_len == 0 {
            return Err(CatalogError::InvalidSettings(
                "min_keyword_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A catalog row as stored in the search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexDocument {
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Completion payload for the suggester.
    pub suggest_keywords: CompletionInput,
}

impl IndexDocument {
    /// Build the document for a catalog row.
    pub fn from_item(item: &CatalogItem, settings: &IndexSettings) -> Self {
        let input = suggestion_inputs(
            &item.name,
            item.brand.as_deref(),
            item.category.as_deref(),
            settings.min_keyword_len,
        );

        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            brand: item.brand.clone(),
            category: item.category.clone(),
            suggest_keywords: CompletionInput::new(input).with_weight(settings.weight),
        }
    }

    /// Document source as JSON, with the completion payload stored under
    /// the configured field name.
    pub fn to_source(&self, settings: &IndexSettings) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if settings.suggest_field != "suggest_keywords" {
            if let Some(map) = value.as_object_mut() {
                if let Some(suggest) = map.remove("suggest_keywords") {
                    map.insert(settings.suggest_field.clone(), suggest);
                }
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luggage() -> CatalogItem {
        CatalogItem::new(100, "RIMOWA SALSA AIR", 1_249_900, "https://img/100.jpg")
            .with_brand("RIMOWA")
            .with_category("拉杆箱")
    }

    #[test]
    fn test_document_from_item() {
        let doc = IndexDocument::from_item(&luggage(), &IndexSettings::default());

        assert_eq!(doc.id, ProductId::new(100));
        assert_eq!(
            doc.suggest_keywords.input,
            vec!["RIMOWA", "SALSA", "AIR", "RIMOWA", "拉杆箱"]
        );
        assert_eq!(doc.suggest_keywords.weight, 10);
    }

    #[test]
    fn test_document_source_shape() {
        let settings = IndexSettings::default();
        let doc = IndexDocument::from_item(&CatalogItem::new(1, "Pen", 150, "p.png"), &settings);

        assert_eq!(
            doc.to_source(&settings).unwrap(),
            json!({
                "id": 1,
                "name": "Pen",
                "price": 150,
                "image": "p.png",
                "suggest_keywords": {"input": ["Pen"], "weight": 10},
            })
        );
    }

    #[test]
    fn test_document_source_keeps_present_brand() {
        let settings = IndexSettings::default();
        let doc = IndexDocument::from_item(
            &CatalogItem::new(2, "Kettle", 2_500, "k.png").with_category("Kitchen"),
            &settings,
        );
        let source = doc.to_source(&settings).unwrap();

        assert!(source.get("brand").is_none());
        assert_eq!(source["category"], "Kitchen");
    }

    #[test]
    fn test_custom_suggest_field() {
        let settings = IndexSettings {
            suggest_field: "suggest".to_string(),
            weight: 3,
            ..IndexSettings::default()
        };
        let doc = IndexDocument::from_item(&luggage(), &settings);
        let source = doc.to_source(&settings).unwrap();

        assert!(source.get("suggest_keywords").is_none());
        assert_eq!(source["suggest"]["weight"], 3);
    }

    #[test]
    fn test_settings_validation() {
        assert!(IndexSettings::default().validate().is_ok());

        let upper = IndexSettings {
            index_name: "Items".to_string(),
            ..IndexSettings::default()
        };
        assert!(matches!(upper.validate(), Err(CatalogError::InvalidSettings(_))));

        let zero = IndexSettings {
            min_keyword_len: 0,
            ..IndexSettings::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_settings_defaults_from_partial_json() {
        let settings: IndexSettings = serde_json::from_value(json!({"weight": 5})).unwrap();
        assert_eq!(settings.index_name, "item");
        assert_eq!(settings.weight, 5);
        assert_eq!(settings.min_keyword_len, 2);
    }
}
