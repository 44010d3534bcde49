//! Storefront product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as rendered by the storefront.
///
/// The optional metadata fields are left out of the JSON entirely when absent,
/// so the minimal required-fields form and the extended form both round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Identifier assigned by the upstream catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price as stored upstream (minor currency units). Fractional values
    /// such as `12.5` are refused on deserialization.
    pub price: i64,
    /// URL or path of the product image.
    pub image: String,
    /// Free-form description.
    pub description: String,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Name fragment with highlight markup, filled in from a search hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl Product {
    /// Create a product with only the required fields.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: i64,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
            brand: None,
            category: None,
            highlight: None,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the highlighted name fragment.
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }

    /// Name to render: the highlight when a search produced one.
    pub fn display_name(&self) -> &str {
        self.highlight.as_deref().unwrap_or(&self.name)
    }
}
