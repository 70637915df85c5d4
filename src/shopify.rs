//! Shopify export parsing.
//!
//! Extracts the handful of columns the line sheet needs from the wide
//! product-export CSV, then folds consecutive rows into the
//! set → product → variant tree. Grouping relies entirely on export order:
//! a new handle starts a set, a product-type change starts a product, and
//! every row contributes one variant.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::csv::parse_records;
use crate::download::suggest_filename;
use crate::error::Result;
use crate::pricing::wholesale_price;
use crate::types::{Product, ProductSet, ProductVariant};

// Column indexes in the Shopify product export.
const COL_HANDLE: usize = 0;
const COL_TITLE: usize = 1;
const COL_TYPE: usize = 8;
const COL_COLOR: usize = 10;
const COL_SKU: usize = 13;
const COL_PRICE: usize = 19;
const COL_IMAGE_SRC: usize = 24;
const COL_VARIANT_IMAGE: usize = 43;

/// The fields of one export row that matter to the line sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopifyRecord {
    pub handle: String,
    pub title: String,
    pub product_type: String,
    pub color: String,
    pub sku: String,
    pub price: String,
    pub image_src: String,
    pub variant_image: String,
}

impl ShopifyRecord {
    fn from_fields(fields: &[String]) -> Self {
        let field = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
        Self {
            handle: field(COL_HANDLE),
            title: field(COL_TITLE),
            product_type: field(COL_TYPE),
            color: field(COL_COLOR),
            sku: field(COL_SKU),
            price: field(COL_PRICE),
            image_src: field(COL_IMAGE_SRC),
            variant_image: field(COL_VARIANT_IMAGE),
        }
    }
}

/// Titles containing `" - "` are per-variant listings exported as standalone
/// products; they never start a set worth placing.
fn is_valid_set_title(title: &str) -> bool {
    !title.contains(" - ")
}

/// The parsed catalog: product sets plus the url → local path queue of
/// photos to download.
#[derive(Debug, Default)]
pub struct Catalog {
    pub sets: Vec<ProductSet>,
    pub assets: BTreeMap<String, PathBuf>,
}

impl Catalog {
    /// Queue `url` for download under `asset_root` and return the local
    /// path the template will link to.
    fn queue_asset(&mut self, url: &str, asset_root: &Path) -> String {
        let path = asset_root.join(suggest_filename(url));
        let local = path.to_string_lossy().into_owned();
        self.assets.insert(url.to_string(), path);
        local
    }
}

/// Parse a Shopify product export into product sets.
///
/// `discount_factor` converts retail to wholesale prices as rows are read;
/// `asset_root` is where referenced photos will live locally. The first
/// record is assumed to be the header row.
pub fn parse_catalog(text: &str, discount_factor: f64, asset_root: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    let mut current_set: Option<ProductSet> = None;
    let mut current_product: Option<Product> = None;
    let mut skipping = false;
    let mut previous = ShopifyRecord::default();

    let records = parse_records(text);
    tracing::debug!(records = records.len().saturating_sub(1), "read export rows");

    for fields in records.iter().skip(1) {
        let record = ShopifyRecord::from_fields(fields);
        let starts_set = record.handle != previous.handle;
        let starts_product = starts_set || record.product_type != previous.product_type;
        previous = record.clone();

        if starts_set {
            if is_valid_set_title(&record.title) {
                flush_set(&mut catalog, &mut current_set, &mut current_product);

                let mut set = ProductSet {
                    handle: record.handle.clone(),
                    name: record.title.clone(),
                    ..Default::default()
                };
                if !record.image_src.is_empty() {
                    set.picture_path = catalog.queue_asset(&record.image_src, asset_root);
                }
                current_set = Some(set);
                skipping = false;
            } else {
                tracing::debug!(title = %record.title, "skipping variant-style listing");
                skipping = true;
            }
        }

        if skipping {
            continue;
        }

        if starts_product {
            if !starts_set {
                flush_product(&mut current_set, &mut current_product);
            }
            current_product = Some(Product {
                name: record.product_type.clone(),
                wholesale_price: wholesale_price(&record.price, discount_factor)?,
                ..Default::default()
            });
        }

        let mut variant = ProductVariant {
            sku: record.sku.clone(),
            color: record.color.clone(),
            ..Default::default()
        };
        if !record.variant_image.is_empty() {
            variant.picture_path = catalog.queue_asset(&record.variant_image, asset_root);
        }
        if let Some(product) = current_product.as_mut() {
            product.variants.push(variant);
        }
    }

    flush_set(&mut catalog, &mut current_set, &mut current_product);
    Ok(catalog)
}

fn flush_product(set: &mut Option<ProductSet>, product: &mut Option<Product>) {
    if let (Some(set), Some(product)) = (set.as_mut(), product.take()) {
        set.products.push(product);
    }
}

fn flush_set(
    catalog: &mut Catalog,
    set: &mut Option<ProductSet>,
    product: &mut Option<Product>,
) {
    flush_product(set, product);
    if let Some(set) = set.take() {
        catalog.sets.push(set);
    }
}
