//! linesheet — Shopify product exports → InDesign data-merge line sheets.
//!
//! Pipeline: parse the Shopify export CSV into a set → product → variant
//! tree, pick a print-template layout per set, place products onto the
//! fixed template grid, and serialize one data-merge record per set. The
//! photos referenced by the export are downloaded alongside so InDesign
//! can link them locally.
//!
//! The interesting part lives in [`layout`]: a variable number of products
//! and color variants has to land deterministically on a fixed,
//! pre-numbered grid of template cells, and the numbering rules are
//! template-specific down to individual off-by-one quirks.

pub mod csv;
pub mod download;
pub mod error;
pub mod export;
pub mod layout;
pub mod pipeline;
pub mod pricing;
pub mod schema;
pub mod shopify;
pub mod types;

pub use error::{LinesheetError, Result};
pub use types::{Product, ProductSet, ProductVariant};
