use shapefile::dbase::{FieldValue, Record};

/// reads an attribute field of a shapefile record as text.
///
/// character and memo fields are returned without their trailing padding, numeric
/// fields are written without a fractional part when they hold an integral value.
/// missing fields, null values and non-textual field types (dates, logicals) read
/// as the empty string, which callers treat as "no value".
pub fn field_text(record: &Record, field: &str) -> String {
    let value = match record.get(field) {
        Some(value) => value,
        None => return String::new(),
    };
    match value {
        FieldValue::Character(Some(s)) => s.trim_end().to_string(),
        FieldValue::Character(None) => String::new(),
        FieldValue::Memo(s) => s.trim_end().to_string(),
        FieldValue::Numeric(Some(n)) => number_text(*n),
        FieldValue::Numeric(None) => String::new(),
        FieldValue::Float(Some(n)) => number_text(f64::from(*n)),
        FieldValue::Float(None) => String::new(),
        FieldValue::Integer(n) => n.to_string(),
        FieldValue::Double(n) => number_text(*n),
        FieldValue::Currency(n) => number_text(*n),
        other => {
            log::debug!(
                "field '{}' has non-textual field type '{}', reading as empty",
                field,
                other.field_type()
            );
            String::new()
        }
    }
}

fn number_text(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}
