//! The analysis engine: coercion, profiling, and assembly.
//!
//! [`analyze`] is a pure function from a [`RawTable`] plus file metadata to a
//! [`DataSet`]. It is synchronous, holds no state across invocations, and
//! never fails: degenerate input (all-null columns, zero data rows) produces
//! well-formed but empty/default profiles. The file boundary in
//! [`crate::ingestion`] is responsible for rejecting header-only tables with
//! [`crate::AnalysisError::EmptyData`] before calling in here.
//!
//! Stages:
//!
//! - [`coerce`]: raw cells → headers + typed [`crate::types::DataPoint`] rows
//! - [`profile`]: per-column type inference + descriptive statistics
//! - [`analyze`]: packages both with file metadata into the final [`DataSet`]
//!
//! ```rust
//! use sheet_profiler::analysis::analyze;
//! use sheet_profiler::types::{ColumnType, RawTable};
//!
//! let table = RawTable::new(vec![
//!     vec!["id".into(), "name".into()],
//!     vec!["1".into(), "Ada".into()],
//!     vec!["2".into(), "Grace".into()],
//! ]);
//!
//! let ds = analyze(table, "people.csv", 64);
//! assert_eq!(ds.row_count, 2);
//! assert_eq!(ds.stats[0].column_type, ColumnType::Number);
//! assert_eq!(ds.stats[1].column_type, ColumnType::String);
//! ```

pub mod coerce;
pub mod profile;

pub use coerce::coerce_table;
pub use profile::{profile_column, profile_columns};

use crate::types::{DataSet, RawTable};

/// Analyze a raw table into an immutable [`DataSet`].
///
/// `file_name` and `file_size` are passed through unmodified from whatever
/// read the file; they carry no semantics here.
pub fn analyze(table: RawTable, file_name: impl Into<String>, file_size: u64) -> DataSet {
    let (headers, data) = coerce_table(table);
    let stats = profile_columns(&headers, &data);

    DataSet {
        file_name: file_name.into(),
        file_size,
        row_count: data.len(),
        column_count: headers.len(),
        headers,
        data,
        stats,
    }
}
