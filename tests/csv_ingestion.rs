use sheet_profiler::analysis::analyze;
use sheet_profiler::ingestion::csv::{raw_table_from_path, raw_table_from_reader};
use sheet_profiler::types::{CellValue, ColumnType, RawCell};

#[test]
fn raw_table_from_path_happy_path() {
    let table = raw_table_from_path("tests/fixtures/people.csv").unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.data_row_count(), 2);
    assert_eq!(
        table.rows[0],
        vec!["id".into(), "name".into(), "score".into(), "active".into()]
    );
    assert_eq!(table.rows[1][1], RawCell::Text("Ada".to_string()));
}

#[test]
fn csv_fixture_analyzes_into_typed_columns() {
    let table = raw_table_from_path("tests/fixtures/people.csv").unwrap();
    let ds = analyze(table, "people.csv", 56);

    assert_eq!(ds.row_count, 2);
    assert_eq!(ds.headers, vec!["id", "name", "score", "active"]);

    assert_eq!(ds.column_stats("id").unwrap().column_type, ColumnType::Number);
    assert_eq!(ds.column_stats("name").unwrap().column_type, ColumnType::String);
    assert_eq!(ds.column_stats("active").unwrap().column_type, ColumnType::Boolean);

    let score = ds.column_stats("score").unwrap();
    assert_eq!(score.min, Some(91.0));
    assert_eq!(score.max, Some(98.5));
    assert_eq!(score.mean, Some(94.75));

    assert_eq!(ds.data[0]["active"], CellValue::Bool(true));
    assert_eq!(ds.data[1]["name"], CellValue::Text("Grace".to_string()));
}

#[test]
fn blank_fields_surface_as_missing_values() {
    let input = "n,label\n1,\n,b\n2,c\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());
    let table = raw_table_from_reader(&mut rdr).unwrap();
    let ds = analyze(table, "gaps.csv", input.len() as u64);

    assert_eq!(ds.column_stats("n").unwrap().missing, 1);
    assert_eq!(ds.column_stats("label").unwrap().missing, 1);
    assert_eq!(ds.data[0]["label"], CellValue::Null);
    assert_eq!(ds.data[1]["n"], CellValue::Null);
}

#[test]
fn missing_file_is_an_error() {
    assert!(raw_table_from_path("tests/fixtures/does_not_exist.csv").is_err());
}
