//! Type coercion stage: raw cells into typed rows.

use crate::types::{format_number, CellValue, DataPoint, RawCell, RawTable};

/// Split a [`RawTable`] into its header list and coerced data rows.
///
/// The first row's cells become the headers, stringified verbatim in original
/// order. Every following row becomes a [`DataPoint`] keyed by header name;
/// rows shorter than the header list are padded with nulls. Called with a
/// header-only (or entirely empty) table, this yields an empty row sequence —
/// the empty-data check belongs to the file boundary, not this stage.
///
/// Duplicate header names are kept as-is: in each row map the later duplicate
/// overwrites the earlier one under the same key.
pub fn coerce_table(table: RawTable) -> (Vec<String>, Vec<DataPoint>) {
    let mut rows = table.rows.into_iter();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_string).collect(),
        None => return (Vec::new(), Vec::new()),
    };

    let data: Vec<DataPoint> = rows
        .map(|row| {
            let mut point = DataPoint::with_capacity(headers.len());
            for (idx, header) in headers.iter().enumerate() {
                point.insert(header.clone(), coerce_cell(row.get(idx)));
            }
            point
        })
        .collect();

    (headers, data)
}

/// Stringify a header cell verbatim.
fn header_string(cell: &RawCell) -> String {
    match cell {
        RawCell::Empty => String::new(),
        RawCell::Text(s) => s.clone(),
        RawCell::Number(v) => format_number(*v),
        RawCell::Bool(b) => b.to_string(),
    }
}

/// Coerce a single raw cell into a typed [`CellValue`].
///
/// Rules, in order: missing/blank → null; numerically parseable text → number
/// (NaN-producing text stays text; blank text is never treated as zero);
/// the literal strings `"true"`/`"false"` → boolean; anything else stays text.
/// Typed number/boolean cells pass through unchanged.
fn coerce_cell(cell: Option<&RawCell>) -> CellValue {
    match cell {
        None | Some(RawCell::Empty) => CellValue::Null,
        Some(RawCell::Number(v)) => CellValue::Number(*v),
        Some(RawCell::Bool(b)) => CellValue::Bool(*b),
        Some(RawCell::Text(s)) => coerce_text(s),
    }
}

fn coerce_text(s: &str) -> CellValue {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }

    if let Ok(v) = trimmed.parse::<f64>() {
        if !v.is_nan() {
            return CellValue::Number(v);
        }
    }

    match s {
        "true" => CellValue::Bool(true),
        "false" => CellValue::Bool(false),
        _ => CellValue::Text(s.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce_cell, coerce_table, header_string};
    use crate::types::{CellValue, RawCell, RawTable};

    #[test]
    fn coerce_cell_applies_rules_in_order() {
        assert_eq!(coerce_cell(None), CellValue::Null);
        assert_eq!(coerce_cell(Some(&RawCell::Empty)), CellValue::Null);
        assert_eq!(coerce_cell(Some(&"".into())), CellValue::Null);
        assert_eq!(coerce_cell(Some(&"   ".into())), CellValue::Null);
        assert_eq!(coerce_cell(Some(&"42".into())), CellValue::Number(42.0));
        assert_eq!(coerce_cell(Some(&" 1.5 ".into())), CellValue::Number(1.5));
        assert_eq!(coerce_cell(Some(&"-3e2".into())), CellValue::Number(-300.0));
        assert_eq!(coerce_cell(Some(&"true".into())), CellValue::Bool(true));
        assert_eq!(coerce_cell(Some(&"false".into())), CellValue::Bool(false));
        assert_eq!(
            coerce_cell(Some(&"hello".into())),
            CellValue::Text("hello".to_string())
        );
        // Typed cells pass through.
        assert_eq!(coerce_cell(Some(&RawCell::Number(7.0))), CellValue::Number(7.0));
        assert_eq!(coerce_cell(Some(&RawCell::Bool(false))), CellValue::Bool(false));
    }

    #[test]
    fn nan_text_stays_text() {
        assert_eq!(
            coerce_cell(Some(&"NaN".into())),
            CellValue::Text("NaN".to_string())
        );
    }

    #[test]
    fn case_sensitive_booleans() {
        assert_eq!(
            coerce_cell(Some(&"True".into())),
            CellValue::Text("True".to_string())
        );
        assert_eq!(
            coerce_cell(Some(&"FALSE".into())),
            CellValue::Text("FALSE".to_string())
        );
    }

    #[test]
    fn header_cells_stringify_verbatim() {
        assert_eq!(header_string(&RawCell::Empty), "");
        assert_eq!(header_string(&"name".into()), "name");
        assert_eq!(header_string(&RawCell::Number(2024.0)), "2024");
        assert_eq!(header_string(&RawCell::Number(1.5)), "1.5");
        assert_eq!(header_string(&RawCell::Bool(true)), "true");
    }

    #[test]
    fn short_rows_are_padded_with_nulls() {
        let table = RawTable::new(vec![
            vec!["a".into(), "b".into()],
            vec!["only-a".into()],
        ]);
        let (headers, data) = coerce_table(table);
        assert_eq!(headers, vec!["a", "b"]);
        assert_eq!(data[0]["a"], CellValue::Text("only-a".to_string()));
        assert_eq!(data[0]["b"], CellValue::Null);
    }

    #[test]
    fn duplicate_headers_collide_in_row_maps() {
        let table = RawTable::new(vec![
            vec!["x".into(), "x".into()],
            vec!["first".into(), "second".into()],
        ]);
        let (headers, data) = coerce_table(table);
        // Both headers survive in the list, but the row map has one entry.
        assert_eq!(headers, vec!["x", "x"]);
        assert_eq!(data[0].len(), 1);
        assert_eq!(data[0]["x"], CellValue::Text("second".to_string()));
    }

    #[test]
    fn header_only_table_yields_empty_rows() {
        let table = RawTable::new(vec![vec!["a".into(), "b".into()]]);
        let (headers, data) = coerce_table(table);
        assert_eq!(headers.len(), 2);
        assert!(data.is_empty());
    }

    #[test]
    fn empty_table_yields_nothing() {
        let (headers, data) = coerce_table(RawTable::default());
        assert!(headers.is_empty());
        assert!(data.is_empty());
    }
}
