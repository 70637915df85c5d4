//! Line-sheet CSV output in InDesign data-merge column order.

use crate::csv::write_record;
use crate::schema::{csv_schema, LinesheetEntry};

/// Serialize entries into the data-merge CSV: a header row of slot names
/// followed by one record per set, every record padded to the full schema.
pub fn write_linesheet_csv(entries: &[LinesheetEntry]) -> String {
    let schema = csv_schema();
    let mut out = String::with_capacity((entries.len() + 1) * schema.len() * 8);

    let header: Vec<String> = schema.iter().map(|slot| slot.column_name()).collect();
    write_record(&mut out, &header);

    for entry in entries {
        write_record(&mut out, &entry.to_record(&schema));
    }

    out
}
