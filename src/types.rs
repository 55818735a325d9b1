//! Core data model types.
//!
//! This crate analyzes a loosely-typed [`RawTable`] (rows of cells as read from a
//! spreadsheet file) into an immutable [`DataSet`]: coerced rows plus one
//! [`ColumnStats`] per column.

use indexmap::IndexMap;
use serde::Serialize;

/// A raw cell value as produced by a file parser, before type coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Missing/blank cell.
    Empty,
    /// Text cell (also the form every CSV field arrives in).
    Text(String),
    /// Numeric cell (Excel parsers infer these directly).
    Number(f64),
    /// Boolean cell.
    Bool(bool),
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for RawCell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawCell {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for RawCell {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for RawCell {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Unprocessed rows-of-cells structure from file parsing, header row included.
///
/// The first row holds header text; every following row is a data row. A
/// `RawTable` is consumed once by [`crate::analysis::analyze`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Row-major cell storage; `rows[0]` is the header row.
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Create a raw table from rows (header row first).
    pub fn new(rows: Vec<Vec<RawCell>>) -> Self {
        Self { rows }
    }

    /// Total number of rows, header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of data rows (everything after the header row).
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

impl From<Vec<Vec<RawCell>>> for RawTable {
    fn from(rows: Vec<Vec<RawCell>>) -> Self {
        Self::new(rows)
    }
}

/// A coerced, strongly-tagged cell value in a [`DataPoint`].
///
/// Serializes untagged, so JSON output is a plain primitive
/// (`null` / number / string / bool) exactly as presentation layers expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing/blank cell.
    Null,
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The inferred column type this value contributes, or `None` for nulls.
    pub fn kind(&self) -> Option<ColumnType> {
        match self {
            Self::Null => None,
            Self::Number(_) => Some(ColumnType::Number),
            Self::Text(_) => Some(ColumnType::String),
            Self::Bool(_) => Some(ColumnType::Boolean),
        }
    }

    /// Stringified form used for uniqueness counting and frequency keys.
    ///
    /// Numbers with no fractional part render without a trailing `.0`, so the
    /// number `1` and the text `"1"` stringify identically.
    pub fn to_key_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Number(v) => format_number(*v),
            Self::Text(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Render a number the way dynamic runtimes display it: integral values
/// without a decimal point.
pub(crate) fn format_number(v: f64) -> String {
    // The i64 cast saturates for magnitudes beyond its range; fall back to the
    // float form there.
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        (v as i64).to_string()
    } else {
        v.to_string()
    }
}

/// One coerced data record: column name → typed value, keys in header order.
pub type DataPoint = IndexMap<String, CellValue>;

/// Semantic type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// All non-null values are numbers.
    Number,
    /// All non-null values are text.
    String,
    /// All non-null values are booleans.
    Boolean,
    /// Declared for upstream sources that supply date-typed cells directly;
    /// never produced by the coercion rules in this crate.
    Date,
    /// No non-null values, or more than one value kind present.
    Mixed,
}

/// Per-column inferred type plus descriptive statistics.
///
/// The numeric fields are `Some` exactly when `column_type` is
/// [`ColumnType::Number`]; `frequencies`/`mode` are `Some` exactly when it is
/// [`ColumnType::String`] or [`ColumnType::Boolean`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStats {
    /// Column (header) name.
    pub name: String,
    /// Inferred semantic type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Non-null value count.
    pub count: usize,
    /// Distinct stringified non-null values.
    pub unique: usize,
    /// Null value count. `count + missing` equals the dataset row count.
    pub missing: usize,
    /// Minimum (numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum (numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Arithmetic mean (numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Median; even counts average the two middle elements (numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    /// Population standard deviation (numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    /// Value → occurrence count, in first-seen order (string/boolean columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencies: Option<IndexMap<String, usize>>,
    /// Most frequent value; ties resolve to the first value seen. Boolean
    /// columns carry a [`CellValue::Bool`] here, not its string key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CellValue>,
}

/// The complete, immutable analysis result consumed by presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    /// Display name of the analyzed file.
    pub file_name: String,
    /// Byte size of the analyzed file.
    pub file_size: u64,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Column names, in original order.
    pub headers: Vec<String>,
    /// Coerced rows, in original order.
    pub data: Vec<DataPoint>,
    /// One profile per header, aligned with `headers`.
    pub stats: Vec<ColumnStats>,
}

impl DataSet {
    /// Look up a column profile by name.
    pub fn column_stats(&self, name: &str) -> Option<&ColumnStats> {
        self.stats.iter().find(|s| s.name == name)
    }

    /// Iterate a column's values across all rows.
    ///
    /// Yields [`CellValue::Null`] for rows without an entry (which only
    /// happens for names absent from the header list).
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.data
            .iter()
            .map(move |row| row.get(name).unwrap_or(&CellValue::Null))
    }
}
