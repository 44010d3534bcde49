//! Catalog types and search-index preparation for a storefront.
//!
//! This crate provides the shapes a storefront front end consumes and the
//! tooling that turns upstream catalog rows into search-index documents:
//!
//! - **Catalog**: `Product`, the upstream `CatalogItem` row
//! - **Search**: `SearchSuggestion`, highlight markup, request parameters
//! - **Index**: completion-suggester keywords, index documents, bulk bodies
//!
//! # Example
//!
//! ```rust
//! use product_catalog::prelude::*;
//!
//! let item = CatalogItem::new(7, "RIMOWA 21寸托运箱 SALSA AIR", 1_249_900, "https://img/7.jpg")
//!     .with_brand("RIMOWA")
//!     .with_category("拉杆箱");
//!
//! let settings = IndexSettings::default();
//! let doc = IndexDocument::from_item(&item, &settings);
//! assert_eq!(doc.suggest_keywords.weight, 10);
//!
//! let product: Product = item.into();
//! assert_eq!(product.brand.as_deref(), Some("RIMOWA"));
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod index;
pub mod search;

pub use error::{CatalogError, Result};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, Result};
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{CatalogItem, Product};

    // Index
    pub use crate::index::{
        build_bulk, suggestion_inputs, BulkBody, BulkReport, CompletionInput, IndexDocument,
        IndexSettings,
    };

    // Search
    pub use crate::search::{
        highlight_prefix, strip_tags, HighlightTags, SearchParams, SearchSuggestion,
        SuggestParams,
    };
}
