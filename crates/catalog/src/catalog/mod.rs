//! Product catalog module.
//!
//! Contains the storefront-facing `Product` and the upstream `CatalogItem` row.

pub(crate) mod item;
mod product;

pub use item::CatalogItem;
pub use product::Product;
