use sheet_profiler::ingestion::{analyze_from_path, AnalyzeOptions, SourceFormat};
use sheet_profiler::types::ColumnType;
use sheet_profiler::AnalysisError;

#[test]
fn analyze_from_path_auto_detects_csv() {
    let ds = analyze_from_path("tests/fixtures/people.csv", &AnalyzeOptions::default()).unwrap();

    assert_eq!(ds.file_name, "people.csv");
    assert_eq!(ds.file_size, 56);
    assert_eq!(ds.row_count, 2);
    assert_eq!(ds.column_count, 4);
    assert_eq!(ds.column_stats("score").unwrap().column_type, ColumnType::Number);
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    // The path does not exist; the extension check must fire first.
    let err = analyze_from_path("tests/fixtures/data.parquet", &AnalyzeOptions::default()).unwrap_err();
    match err {
        AnalysisError::UnsupportedFileType { extension } => assert_eq!(extension, "parquet"),
        other => panic!("expected UnsupportedFileType, got {other:?}"),
    }
}

#[test]
fn extensionless_path_is_rejected_unless_format_is_forced() {
    let err = analyze_from_path("tests/fixtures/no_extension", &AnalyzeOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFileType { .. }));

    // Forcing a format skips extension inference (and then fails on I/O,
    // since the file genuinely does not exist).
    let opts = AnalyzeOptions {
        format: Some(SourceFormat::Csv),
        ..Default::default()
    };
    let err = analyze_from_path("tests/fixtures/no_extension", &opts).unwrap_err();
    assert!(!matches!(err, AnalysisError::UnsupportedFileType { .. }));
}

#[test]
fn header_only_file_is_empty_data() {
    let err =
        analyze_from_path("tests/fixtures/header_only.csv", &AnalyzeOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyData));
    assert!(err.to_string().contains("no data"));
}
