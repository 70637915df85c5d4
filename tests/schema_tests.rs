//! Schema compatibility tests.
//!
//! The InDesign template was built against one exact column list; these
//! tests pin the generated schema to it, verbatim and in order.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)]

use linesheet::export::write_linesheet_csv;
use linesheet::schema::{csv_schema, LinesheetEntry, Slot};

/// The column list the template was designed against. The row-5 block is
/// never populated but removing it crashes InDesign's data merge.
const EXPECTED_COLUMNS: &[&str] = &[
    "setName",
    "@setPhoto",
    "r1_p1_Product",
    "r1_p1_Price",
    "@r1_p1_BigPhoto",
    "r1_p2_Product",
    "r1_p2_Price",
    "r1_pv1_Color",
    "r1_pv1_Sku",
    "@r1_pv1_Photo",
    "r1_pv2_Color",
    "r1_pv2_Sku",
    "@r1_pv2_Photo",
    "r1_pv3_Color",
    "r1_pv3_Sku",
    "@r1_pv3_Photo",
    "r1_pv4_Color",
    "r1_pv4_Sku",
    "@r1_pv4_Photo",
    "r1_pv5_Color",
    "r1_pv5_Sku",
    "@r1_pv5_Photo",
    "r1_pv6_Color",
    "r1_pv6_Sku",
    "@r1_pv6_Photo",
    "r2_p1_Product",
    "r2_p1_Price",
    "r2_p2_Product",
    "r2_p2_Price",
    "r2_pv1_Color",
    "r2_pv1_Sku",
    "@r2_pv1_Photo",
    "r2_pv2_Color",
    "r2_pv2_Sku",
    "@r2_pv2_Photo",
    "r2_pv3_Color",
    "r2_pv3_Sku",
    "@r2_pv3_Photo",
    "r2_pv4_Color",
    "r2_pv4_Sku",
    "@r2_pv4_Photo",
    "r2_pv5_Color",
    "r2_pv5_Sku",
    "@r2_pv5_Photo",
    "r2_pv6_Color",
    "r2_pv6_Sku",
    "@r2_pv6_Photo",
    "r3_p1_Product",
    "r3_p1_Price",
    "r3_p2_Product",
    "r3_p2_Price",
    "r3_pv1_Color",
    "r3_pv1_Sku",
    "@r3_pv1_Photo",
    "r3_pv2_Color",
    "r3_pv2_Sku",
    "@r3_pv2_Photo",
    "r3_pv3_Color",
    "r3_pv3_Sku",
    "@r3_pv3_Photo",
    "r3_pv4_Color",
    "r3_pv4_Sku",
    "@r3_pv4_Photo",
    "r3_pv5_Color",
    "r3_pv5_Sku",
    "@r3_pv5_Photo",
    "r3_pv6_Color",
    "r3_pv6_Sku",
    "@r3_pv6_Photo",
    "r4_p1_Product",
    "r4_p1_Price",
    "r4_p2_Product",
    "r4_p2_Price",
    "r4_pv1_Color",
    "r4_pv1_Sku",
    "@r4_pv1_Photo",
    "r4_pv2_Color",
    "r4_pv2_Sku",
    "@r4_pv2_Photo",
    "r4_pv3_Color",
    "r4_pv3_Sku",
    "@r4_pv3_Photo",
    "r4_pv4_Color",
    "r4_pv4_Sku",
    "@r4_pv4_Photo",
    "r4_pv5_Color",
    "r4_pv5_Sku",
    "@r4_pv5_Photo",
    "r4_pv6_Color",
    "r4_pv6_Sku",
    "@r4_pv6_Photo",
    "r5_p1_Product",
    "r5_p1_Price",
    "r5_p2_Product",
    "r5_p2_Price",
    "r5_pv1_Color",
    "r5_pv1_Sku",
    "@r5_pv1_Photo",
    "r5_pv2_Color",
    "r5_pv2_Sku",
    "@r5_pv2_Photo",
    "r5_pv3_Color",
    "r5_pv3_Sku",
    "@r5_pv3_Photo",
    "r5_pv4_Color",
    "r5_pv4_Sku",
    "@r5_pv4_Photo",
    "r5_pv5_Color",
    "r5_pv5_Sku",
    "@r5_pv5_Photo",
    "r5_pv6_Color",
    "r5_pv6_Sku",
    "@r5_pv6_Photo",
];

#[test]
fn schema_matches_template_columns_exactly() {
    let names: Vec<String> = csv_schema().iter().map(|s| s.column_name()).collect();
    assert_eq!(names.len(), EXPECTED_COLUMNS.len());
    for (i, (got, want)) in names.iter().zip(EXPECTED_COLUMNS).enumerate() {
        assert_eq!(got, want, "column {i}");
    }
}

#[test]
fn any_entry_serializes_against_the_full_schema() {
    // A sparse entry and an empty one both produce full-width records.
    let mut sparse = LinesheetEntry::new();
    sparse.set(Slot::SetName, "Alpine");
    sparse.set(Slot::Sku { row: 4, cell: 6 }, " LAST ");

    for entry in [sparse, LinesheetEntry::new()] {
        let record = entry.to_record(&csv_schema());
        assert_eq!(record.len(), EXPECTED_COLUMNS.len());
    }
}

#[test]
fn csv_header_is_the_template_column_list() {
    let out = write_linesheet_csv(&[]);
    let header_line = out.lines().next().unwrap();
    assert_eq!(header_line, EXPECTED_COLUMNS.join(","));
}
