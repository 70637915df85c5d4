//! Print-template layout selection.
//!
//! The line sheet ships with exactly three hand-designed template variants;
//! this module picks one per product set from the set's shape alone, or
//! refuses. It deliberately errors out rather than generalizing to
//! arbitrary row/column counts.

mod placement;

pub use placement::place;

use crate::error::{LinesheetError, Result};

/// The chosen template shape for one product set.
///
/// A value object: recomputed per set, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Product columns per template row (1 or 2).
    pub num_columns: usize,
    /// Whether the first product's photo fills the large hero frame.
    pub use_big_image: bool,
}

/// Pick a layout for a set with `product_count` products whose largest
/// product has `max_variant_count` variants.
///
/// Rules are evaluated in order, first match wins. The function never
/// inspects product content.
pub fn select_layout(product_count: usize, max_variant_count: usize) -> Result<Layout> {
    if product_count == 1 && max_variant_count == 1 {
        Ok(Layout {
            num_columns: 1,
            use_big_image: true,
        })
    } else if product_count > 1 && max_variant_count == 1 {
        Ok(Layout {
            num_columns: 2,
            use_big_image: true,
        })
    } else if (2..=4).contains(&product_count) && max_variant_count <= 6 {
        Ok(Layout {
            num_columns: 1,
            use_big_image: false,
        })
    } else {
        Err(LinesheetError::Capacity {
            products: product_count,
            max_variants: max_variant_count,
        })
    }
}
