//! The fixed InDesign data-merge slot schema.
//!
//! Column names must correspond, byte for byte and in order, to the data
//! merge placeholders in the InDesign template. Slots are a closed enum so
//! a misspelled column name is unrepresentable rather than a silent
//! mismatch at merge time.

use std::collections::HashMap;

/// Volume name prefixed to every InDesign link path.
pub const VOLUME_PREFIX: &str = "Macintosh HD";

/// Hard per-product variant limit imposed by the template.
pub const VARIANTS_PER_PRODUCT: usize = 6;

/// Template rows present in the CSV schema. Row 5 is never populated, but
/// removing its columns crashes InDesign's data merge even when all of the
/// corresponding placeholders are gone from the template.
const SCHEMA_ROWS: u32 = 5;

/// Product columns per template row.
const PRODUCT_COLUMNS: u32 = 2;

/// Variant sub-cells per row, as slot coordinates.
const VARIANT_CELLS: u32 = 6;

/// One named placeholder position in the template.
///
/// `row`/`col`/`cell` are 1-based, matching the template's numbering.
/// Values outside the schema bounds are representable (the placement engine
/// can walk past row 5 for oversized sets) but are simply never emitted,
/// since serialization iterates the schema rather than the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Set title, placed verbatim.
    SetName,
    /// Set-level hero image link.
    SetPhoto,
    /// The big product photo of single-variant layouts. Template-fixed to
    /// row 1, product cell 1.
    BigPhoto,
    /// Compound product name + price field.
    Product { row: u32, col: u32 },
    /// Standalone price column. Present in the schema, never written: the
    /// template packs price into the `Product` placeholder instead.
    Price { row: u32, col: u32 },
    /// Variant color label.
    Color { row: u32, cell: u32 },
    /// Variant SKU.
    Sku { row: u32, cell: u32 },
    /// Variant photo link.
    Photo { row: u32, cell: u32 },
}

impl Slot {
    /// The CSV column name. `@`-prefixed names are InDesign image links.
    pub fn column_name(&self) -> String {
        match *self {
            Slot::SetName => "setName".to_string(),
            Slot::SetPhoto => "@setPhoto".to_string(),
            Slot::BigPhoto => "@r1_p1_BigPhoto".to_string(),
            Slot::Product { row, col } => format!("r{row}_p{col}_Product"),
            Slot::Price { row, col } => format!("r{row}_p{col}_Price"),
            Slot::Color { row, cell } => format!("r{row}_pv{cell}_Color"),
            Slot::Sku { row, cell } => format!("r{row}_pv{cell}_Sku"),
            Slot::Photo { row, cell } => format!("@r{row}_pv{cell}_Photo"),
        }
    }

    /// True for slots holding image link paths.
    pub fn is_asset_link(&self) -> bool {
        matches!(
            self,
            Slot::SetPhoto | Slot::BigPhoto | Slot::Photo { .. }
        )
    }
}

/// The full CSV column order InDesign expects, including the unused row-5
/// block.
pub fn csv_schema() -> Vec<Slot> {
    let mut schema = vec![Slot::SetName, Slot::SetPhoto];
    for row in 1..=SCHEMA_ROWS {
        for col in 1..=PRODUCT_COLUMNS {
            schema.push(Slot::Product { row, col });
            schema.push(Slot::Price { row, col });
            if row == 1 && col == 1 {
                schema.push(Slot::BigPhoto);
            }
        }
        for cell in 1..=VARIANT_CELLS {
            schema.push(Slot::Color { row, cell });
            schema.push(Slot::Sku { row, cell });
            schema.push(Slot::Photo { row, cell });
        }
    }
    schema
}

/// The fully populated slot → value mapping produced for one product set.
///
/// Created fresh per set, filled by one placement run, then serialized.
/// Slots the engine never reached are absent and default to empty strings
/// when a record is written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinesheetEntry {
    slots: HashMap<Slot, String>,
}

impl LinesheetEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: Slot, value: impl Into<String>) {
        self.slots.insert(slot, value.into());
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Serialize into one CSV record following `schema` order, with empty
    /// strings for absent slots.
    pub fn to_record(&self, schema: &[Slot]) -> Vec<String> {
        schema
            .iter()
            .map(|slot| self.slots.get(slot).cloned().unwrap_or_default())
            .collect()
    }
}

/// Construct an InDesign link path from an OS path.
///
/// InDesign wants HFS-style paths: `:`-separated, prefixed with the volume
/// name. Decidedly not cross-platform, but it is what the data merge
/// feature resolves.
pub fn indesign_link_path(path: &str) -> String {
    format!("{VOLUME_PREFIX}{}", path.replace(['/', '\\'], ":"))
}
