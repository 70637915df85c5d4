//! Core data types for the product catalog.

mod catalog;

pub use catalog::{Product, ProductSet, ProductVariant};
