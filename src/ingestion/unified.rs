//! Unified file-analysis entrypoint.
//!
//! Most callers should use [`analyze_from_path`], which reads a spreadsheet
//! file into a [`crate::types::RawTable`] and runs the analysis engine over it,
//! returning the finished [`crate::types::DataSet`].
//!
//! - If [`AnalyzeOptions::format`] is `None`, the source format is inferred
//!   from the file extension (`.csv`, `.xlsx`, `.xls`).
//! - If an [`super::observability::AnalysisObserver`] is provided,
//!   success/failure/alerts are reported to it.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::analysis::analyze;
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{DataSet, RawTable};

use super::csv;
use super::observability::{AnalysisContext, AnalysisObserver, AnalysisSeverity, AnalysisStats};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook formats (feature-gated behind `excel`).
    Excel,
}

impl SourceFormat {
    /// Parse a source format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Excel),
            _ => None,
        }
    }
}

/// Options controlling [`analyze_from_path`].
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct AnalyzeOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<SourceFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn AnalysisObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    ///
    /// Defaults to [`AnalysisSeverity::Critical`].
    pub alert_at_or_above: Option<AnalysisSeverity>,
}

impl fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Read and analyze a spreadsheet file in one call.
///
/// Steps, in order:
///
/// 1. Resolve the source format from `options.format` or the file extension;
///    anything but `.csv`/`.xlsx`/`.xls` is rejected with
///    [`AnalysisError::UnsupportedFileType`] before the file is touched.
/// 2. Capture the file's display name and byte size from the filesystem.
/// 3. Parse the file into a raw table (CSV or first worksheet of a workbook).
/// 4. Reject tables with no data rows with [`AnalysisError::EmptyData`].
/// 5. Run [`crate::analysis::analyze`] (infallible) over the raw table.
///
/// When an observer is configured, this function reports `on_success` with row
/// and column counts, `on_failure` with a computed severity, and `on_alert`
/// when that severity reaches `options.alert_at_or_above`.
///
/// # Examples
///
/// ```no_run
/// use sheet_profiler::ingestion::{analyze_from_path, AnalyzeOptions};
///
/// # fn main() -> Result<(), sheet_profiler::AnalysisError> {
/// let ds = analyze_from_path("people.csv", &AnalyzeOptions::default())?;
/// println!("rows={} columns={}", ds.row_count, ds.column_count);
/// for stats in &ds.stats {
///     println!("{}: {:?} (missing {})", stats.name, stats.column_type, stats.missing);
/// }
/// # Ok(())
/// # }
/// ```
///
/// With stderr logging and alerts on critical failures:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use sheet_profiler::ingestion::{analyze_from_path, AnalyzeOptions, StdErrObserver};
///
/// let opts = AnalyzeOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     ..Default::default()
/// };
/// // Missing files are Critical and trigger `on_alert` at the default threshold.
/// let _err = analyze_from_path("does_not_exist.csv", &opts).unwrap_err();
/// ```
pub fn analyze_from_path(path: impl AsRef<Path>, options: &AnalyzeOptions) -> AnalysisResult<DataSet> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = AnalysisContext {
        path: path.to_path_buf(),
        format,
    };

    let result = read_and_analyze(path, format);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                AnalysisStats {
                    rows: ds.row_count,
                    columns: ds.column_count,
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above.unwrap_or(AnalysisSeverity::Critical) {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn read_and_analyze(path: &Path, format: SourceFormat) -> AnalysisResult<DataSet> {
    let file_size = fs::metadata(path)?.len();
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let table: RawTable = match format {
        SourceFormat::Csv => csv::raw_table_from_path(path)?,
        SourceFormat::Excel => read_excel(path)?,
    };

    // A header row with zero data rows is rejected here, before the engine
    // runs; the engine itself treats the same input as an empty dataset.
    if table.row_count() <= 1 {
        return Err(AnalysisError::EmptyData);
    }

    Ok(analyze(table, file_name, file_size))
}

#[cfg(feature = "excel")]
fn read_excel(path: &Path) -> AnalysisResult<RawTable> {
    super::excel::raw_table_from_path(path)
}

#[cfg(not(feature = "excel"))]
fn read_excel(path: &Path) -> AnalysisResult<RawTable> {
    // Without the `excel` feature this build simply does not support the type.
    let extension = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Err(AnalysisError::UnsupportedFileType { extension })
}

fn severity_for_error(e: &AnalysisError) -> AnalysisSeverity {
    match e {
        AnalysisError::Io(_) => AnalysisSeverity::Critical,
        AnalysisError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => AnalysisSeverity::Critical,
            _ => AnalysisSeverity::Error,
        },
        #[cfg(feature = "excel")]
        AnalysisError::Excel(_) => AnalysisSeverity::Error,
        AnalysisError::UnsupportedFileType { .. } => AnalysisSeverity::Error,
        AnalysisError::EmptyData => AnalysisSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> AnalysisResult<SourceFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    SourceFormat::from_extension(ext).ok_or_else(|| AnalysisError::UnsupportedFileType {
        extension: ext.to_owned(),
    })
}
