//! Minimal CSV reader/writer.
//!
//! The reader handles quoted fields, escaped quotes and embedded newlines —
//! Shopify exports carry HTML body fields spanning many lines. The writer
//! quotes only when a field actually needs it, which is what InDesign's
//! data merge expects.

/// Parse CSV text into records, respecting quoted fields.
///
/// Lenient on malformed input: an unterminated quote runs to end of input,
/// and blank lines between records are dropped.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                '\r' => {
                    // Part of a CRLF terminator; a lone CR is dropped too.
                }
                '\n' => {
                    fields.push(std::mem::take(&mut current));
                    let blank = fields.len() == 1 && fields.iter().all(String::is_empty);
                    if blank {
                        fields.clear();
                    } else {
                        records.push(std::mem::take(&mut fields));
                    }
                }
                _ => current.push(ch),
            }
        }
    }

    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push(fields);
    }

    records
}

/// Append one CSV record (with terminator) to `out`.
pub fn write_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if needs_quoting(field) {
            out.push('"');
            for ch in field.chars() {
                if ch == '"' {
                    out.push('"');
                }
                out.push(ch);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn needs_quoting(field: &str) -> bool {
    field.contains(['"', ',', '\n', '\r'])
}
