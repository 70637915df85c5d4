//! The set → product → variant tree built from a Shopify export.
//!
//! Insertion order is display order everywhere: the first product of a set
//! gets special treatment in big-image layouts, and variants fill the
//! template sub-cells in the order they appeared in the export.

use serde::Serialize;

/// One color/SKU instance of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductVariant {
    pub sku: String,
    /// Free-text color label; may be empty (rendered as `-`).
    pub color: String,
    /// Local path of the downloaded variant photo; empty = no photo.
    pub picture_path: String,
}

/// A priced catalog item within a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    /// Pre-formatted, discount-adjusted price string. The placement engine
    /// never parses or reformats it.
    pub wholesale_price: String,
    pub variants: Vec<ProductVariant>,
}

/// A top-level grouping of related products sharing one layout decision
/// and one optional hero image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductSet {
    pub handle: String,
    pub name: String,
    /// Local path of the set-level hero image; empty = none.
    pub picture_path: String,
    pub products: Vec<Product>,
}

impl ProductSet {
    /// Largest variant count across the set's products.
    ///
    /// Used only for layout selection; a set handed to the placement engine
    /// is expected to have at least one product with at least one variant.
    pub fn max_variant_count(&self) -> usize {
        self.products
            .iter()
            .map(|p| p.variants.len())
            .max()
            .unwrap_or(0)
    }
}
