use thiserror::Error;

/// Convenience result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by the file boundary.
///
/// The analysis engine itself is infallible; every variant here is raised
/// before the profiler runs (unsupported extension, unreadable or unparseable
/// file, header-only table).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The file extension is not one of the accepted spreadsheet kinds.
    #[error("unsupported file type '{extension}': expected .xlsx, .xls, or .csv")]
    UnsupportedFileType { extension: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file's bytes could not be parsed as CSV.
    #[error("failed to parse csv file: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "excel")]
    /// The file's bytes could not be parsed as a workbook (feature-gated behind `excel`).
    #[error("failed to parse workbook: {0}")]
    Excel(#[from] calamine::Error),

    /// The parsed table has a header row but zero data rows.
    #[error("the file contains no data or only headers")]
    EmptyData,
}
