//! File boundary: reading spreadsheet files into raw tables and analyzing them.
//!
//! Most callers should use [`analyze_from_path`] (from [`unified`]) which:
//!
//! - auto-detects the source format by file extension (or you can override via
//!   [`AnalyzeOptions`])
//! - reads the file into a [`crate::types::RawTable`] and rejects header-only
//!   input before the engine runs
//! - runs [`crate::analysis::analyze`] and returns the [`crate::types::DataSet`]
//! - optionally reports success/failure/alerts to an [`AnalysisObserver`]
//!
//! Format-specific readers are also available under:
//! - [`csv`]
//! - [`excel`] (requires the `excel` cargo feature, on by default)

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod unified;

pub use observability::{
    AnalysisContext, AnalysisObserver, AnalysisSeverity, AnalysisStats, CompositeObserver,
    FileObserver, StdErrObserver,
};
pub use unified::{analyze_from_path, AnalyzeOptions, SourceFormat};
