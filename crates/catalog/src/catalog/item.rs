//! Upstream catalog rows.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::Result;
use crate::ids::ProductId;

/// A row of the upstream `item` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    /// Product identifier.
    pub id: ProductId,
    /// SKU name.
    pub name: String,
    /// Price in minor currency units.
    pub price: i64,
    /// Product image.
    #[serde(default)]
    pub image: String,
    /// Brand, may be blank upstream.
    #[serde(default)]
    pub brand: Option<String>,
    /// Category, may be blank upstream.
    #[serde(default)]
    pub category: Option<String>,
    /// Description; the table has none, exports sometimes add it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogItem {
    /// Create a row with no brand, category or description.
    pub fn new(id: u64, name: impl Into<String>, price: i64, image: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: image.into(),
            brand: None,
            category: None,
            description: None,
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

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Brand, trimmed, or `None` when blank.
    pub fn brand(&self) -> Option<&str> {
        non_blank(self.brand.as_deref())
    }

    /// Category, trimmed, or `None` when blank.
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    /// Parse a JSON array of rows.
    pub fn load_many(json: &str) -> Result<Vec<CatalogItem>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into the storefront shape.
    pub fn into_product(self) -> Product {
        let brand = self.brand().map(str::to_string);
        let category = self.category().map(str::to_string);

        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description.unwrap_or_default(),
            brand,
            category,
            highlight: None,
        }
    }
}

impl From<CatalogItem> for Product {
    fn from(item: CatalogItem) -> Self {
        item.into_product()
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_product_drops_blank_metadata() {
        let item = CatalogItem::new(9, "Desk Lamp", 1999, "/lamp.png")
            .with_brand("   ")
            .with_category(" Lighting ");

        let product = item.into_product();
        assert_eq!(product.brand, None);
        assert_eq!(product.category.as_deref(), Some("Lighting"));
        assert_eq!(product.description, "");
        assert_eq!(product.highlight, None);
    }

    #[test]
    fn test_into_product_keeps_description() {
        let product: Product = CatalogItem::new(1, "Pen", 150, "")
            .with_description("Blue ink")
            .into();
        assert_eq!(product.description, "Blue ink");
        assert_eq!(product.price, 150);
    }

    #[test]
    fn test_load_many() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 100, "image": "a.png", "brand": "X", "category": null},
            {"id": 2, "name": "B", "price": 200}
        ]"#;

        let items = CatalogItem::load_many(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].brand(), Some("X"));
        assert_eq!(items[1].image, "");
        assert_eq!(items[1].category(), None);
    }

    #[test]
    fn test_load_many_rejects_garbage() {
        assert!(CatalogItem::load_many("{not json").is_err());
    }
}
