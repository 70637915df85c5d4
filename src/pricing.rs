//! Wholesale price derivation.
//!
//! Shopify exports carry retail prices; the line sheet shows wholesale
//! prices. The conversion happens once here, during parsing — downstream
//! the price is an opaque, pre-formatted string.

use crate::error::{LinesheetError, Result};

/// Retail price times the discount factor, rounded to cents and formatted
/// with two decimals.
pub fn wholesale_price(retail: &str, discount_factor: f64) -> Result<String> {
    let retail: f64 = retail
        .trim()
        .parse()
        .map_err(|_| LinesheetError::Price(retail.to_string()))?;
    Ok(format!("{:.2}", round_to_cents(retail * discount_factor)))
}

/// Round half away from zero at the second decimal place.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
