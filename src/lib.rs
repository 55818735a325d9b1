//! `sheet-profiler` is a small library for loading a spreadsheet file (Excel or
//! CSV) into a typed in-memory [`types::DataSet`] with per-column inferred
//! types and descriptive statistics.
//!
//! The primary entrypoint is [`ingestion::analyze_from_path`], which
//! auto-detects the source format from the file extension, reads the file into
//! a raw table, and runs the analysis engine over it.
//!
//! ## What analysis produces
//!
//! Each column gets a [`types::ColumnStats`] with an inferred
//! [`types::ColumnType`] and statistics appropriate to it:
//!
//! - every column: `count` (non-null), `unique` (distinct stringified values),
//!   `missing` (nulls)
//! - numeric columns: `min`, `max`, `mean`, `median`, `std` (population)
//! - string/boolean columns: `frequencies` (value → occurrence count, in
//!   first-seen order) and `mode` (ties go to the first value seen)
//!
//! Cell coercion is per-cell: blank cells become null, numerically parseable
//! text becomes a number, the literals `"true"`/`"false"` become booleans, and
//! everything else stays text. A column mixing more than one kind (or holding
//! nothing but nulls) is typed `mixed` and carries no statistics.
//!
//! ## Quick example: analyze a file
//!
//! ```no_run
//! use sheet_profiler::ingestion::{analyze_from_path, AnalyzeOptions};
//!
//! # fn main() -> Result<(), sheet_profiler::AnalysisError> {
//! // Auto-detects by extension (.csv/.xlsx/.xls).
//! let ds = analyze_from_path("survey.xlsx", &AnalyzeOptions::default())?;
//! println!("{} rows, {} columns", ds.row_count, ds.column_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the engine directly
//!
//! The engine is a pure function over an in-memory [`types::RawTable`]; no
//! file is needed:
//!
//! ```rust
//! use sheet_profiler::analysis::analyze;
//! use sheet_profiler::types::{CellValue, ColumnType, RawTable};
//!
//! let table = RawTable::new(vec![
//!     vec!["score".into(), "passed".into()],
//!     vec!["80".into(), "true".into()],
//!     vec!["95".into(), "true".into()],
//!     vec!["".into(), "false".into()],
//! ]);
//!
//! let ds = analyze(table, "grades.csv", 48);
//!
//! let score = &ds.stats[0];
//! assert_eq!(score.column_type, ColumnType::Number);
//! assert_eq!((score.count, score.missing), (2, 1));
//! assert_eq!(score.mean, Some(87.5));
//!
//! let passed = &ds.stats[1];
//! assert_eq!(passed.column_type, ColumnType::Boolean);
//! assert_eq!(passed.mode, Some(CellValue::Bool(true)));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: file boundary (CSV/Excel readers, unified entrypoint,
//!   observability)
//! - [`analysis`]: the engine (type coercion, column profiling, assembly)
//! - [`charts`]: chart-data helpers (frequency bars, 10-bucket histograms)
//! - [`types`]: raw table + dataset model
//! - [`error`]: error types used at the file boundary

pub mod analysis;
pub mod charts;
pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
