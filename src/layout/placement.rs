//! Grid placement: maps a product set onto the fixed template cell slots.
//!
//! Everything in here is specific to one very specific line-sheet template
//! family. Cell numbering rules must be reproduced exactly or the InDesign
//! merge puts values into the wrong frames.

use super::Layout;
use crate::error::{LinesheetError, Result};
use crate::schema::{indesign_link_path, LinesheetEntry, Slot, VARIANTS_PER_PRODUCT};
use crate::types::ProductSet;

/// Current template position while laying out a set's products.
///
/// Row and product cell are 1-based template coordinates. The cursor is a
/// plain value threaded through the product iteration, so each step is
/// testable in isolation and nothing leaks between `place` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlacementCursor {
    row: u32,
    product_cell: u32,
}

impl PlacementCursor {
    fn start() -> Self {
        Self {
            row: 1,
            product_cell: 1,
        }
    }

    /// First variant sub-cell for the product at this position.
    ///
    /// Past row 1 in a two-column layout, the variant of a row-closing
    /// product starts at cell 2 so it sits under the second product column
    /// when the grid wraps.
    fn variant_start(self, layout: Layout, next_starts_new_row: bool) -> u32 {
        if self.row != 1 && layout.num_columns == 2 && next_starts_new_row {
            2
        } else {
            1
        }
    }

    /// Position for the next product.
    ///
    /// In big-image layouts the hero photo and its caption consume an extra
    /// template row, so the first product advances two rows.
    fn advance(self, layout: Layout, product_index: usize, next_starts_new_row: bool) -> Self {
        if layout.use_big_image && product_index == 0 {
            Self {
                row: self.row + 2,
                product_cell: 1,
            }
        } else if next_starts_new_row {
            Self {
                row: self.row + 1,
                product_cell: 1,
            }
        } else {
            Self {
                row: self.row,
                product_cell: self.product_cell + 1,
            }
        }
    }
}

/// Whether the product after `product_index` opens a new template row.
fn starts_new_row(product_index: usize, num_columns: usize) -> bool {
    product_index % num_columns == 0
}

/// Map `set` onto the template cells of `layout`.
///
/// Pure and deterministic: the same set and layout always produce an
/// identical entry. Fails only on a product exceeding the per-product
/// variant limit; a missing first-variant photo in a big-image layout just
/// leaves the hero frame empty.
pub fn place(set: &ProductSet, layout: Layout) -> Result<LinesheetEntry> {
    let mut entry = LinesheetEntry::new();

    entry.set(Slot::SetName, set.name.clone());
    if !set.picture_path.is_empty() {
        entry.set(Slot::SetPhoto, indesign_link_path(&set.picture_path));
    }

    if layout.use_big_image {
        if let Some(first) = set.products.first().and_then(|p| p.variants.first()) {
            if !first.picture_path.is_empty() {
                entry.set(Slot::BigPhoto, indesign_link_path(&first.picture_path));
            }
        }
    }

    let mut cursor = PlacementCursor::start();

    for (index, product) in set.products.iter().enumerate() {
        if product.variants.len() > VARIANTS_PER_PRODUCT {
            return Err(LinesheetError::VariantOverflow {
                handle: set.handle.clone(),
                count: product.variants.len(),
                limit: VARIANTS_PER_PRODUCT,
            });
        }

        // One template placeholder carries both name and price,
        // tab-separated. A template constraint, not an accident.
        entry.set(
            Slot::Product {
                row: cursor.row,
                col: cursor.product_cell,
            },
            format!("{}\t${}", product.name, product.wholesale_price),
        );

        let next_starts_new_row = starts_new_row(index, layout.num_columns);
        let mut cell = cursor.variant_start(layout, next_starts_new_row);

        for variant in &product.variants {
            // The SKU is padded with spaces; the template renders it as-is.
            entry.set(
                Slot::Sku {
                    row: cursor.row,
                    cell,
                },
                format!(" {} ", variant.sku),
            );

            let color = if variant.color.is_empty() {
                "-"
            } else {
                variant.color.as_str()
            };
            entry.set(
                Slot::Color {
                    row: cursor.row,
                    cell,
                },
                color,
            );

            let photo = if variant.picture_path.is_empty() {
                String::new()
            } else {
                indesign_link_path(&variant.picture_path)
            };
            entry.set(
                Slot::Photo {
                    row: cursor.row,
                    cell,
                },
                photo,
            );

            cell += 1;
        }

        cursor = cursor.advance(layout, index, next_starts_new_row);
    }

    Ok(entry)
}
