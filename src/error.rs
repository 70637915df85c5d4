//! Structured error types for linesheet.
//!
//! Every failure here is deterministic and input-derived; there is nothing
//! transient to retry. Whether a bad set aborts the batch or is skipped is
//! the caller's decision (see [`crate::pipeline::ErrorPolicy`]).

/// All errors that can occur while building a line sheet.
#[derive(Debug, thiserror::Error)]
pub enum LinesheetError {
    /// Product/variant counts fit none of the supported template shapes.
    #[error("no supported layout for {products} products with up to {max_variants} variants")]
    Capacity { products: usize, max_variants: usize },

    /// A single product exceeds the per-product variant limit.
    #[error("set {handle}: layout supports at most {limit} variants per product, got {count}")]
    VariantOverflow {
        handle: String,
        count: usize,
        limit: usize,
    },

    /// A price field could not be parsed as a decimal number.
    #[error("invalid price {0:?}")]
    Price(String),

    /// JSON serialization error.
    #[error("JSON serialization: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinesheetError>;
