//! Column profiler: per-column type inference and descriptive statistics.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::types::{CellValue, ColumnStats, ColumnType, DataPoint};

/// Profile every header over the coerced rows, in header order.
///
/// Columns are profiled independently of each other.
pub fn profile_columns(headers: &[String], data: &[DataPoint]) -> Vec<ColumnStats> {
    headers
        .iter()
        .map(|header| profile_column(header, data))
        .collect()
}

/// Profile a single column.
///
/// Degenerate input never fails: an all-null or zero-row column produces a
/// well-formed profile of type [`ColumnType::Mixed`] with no statistics.
pub fn profile_column(name: &str, data: &[DataPoint]) -> ColumnStats {
    let values: Vec<&CellValue> = data
        .iter()
        .map(|row| row.get(name).unwrap_or(&CellValue::Null))
        .collect();
    let non_null: Vec<&CellValue> = values.iter().copied().filter(|v| !v.is_null()).collect();

    let column_type = infer_type(&non_null);

    let unique = non_null
        .iter()
        .map(|v| v.to_key_string())
        .collect::<HashSet<_>>()
        .len();

    let mut stats = ColumnStats {
        name: name.to_owned(),
        column_type,
        count: non_null.len(),
        unique,
        missing: values.len() - non_null.len(),
        min: None,
        max: None,
        mean: None,
        median: None,
        std: None,
        frequencies: None,
        mode: None,
    };

    match column_type {
        ColumnType::Number => {
            let numbers: Vec<f64> = non_null
                .iter()
                .filter_map(|v| match v {
                    CellValue::Number(n) => Some(*n),
                    _ => None,
                })
                .collect();
            if let Some(summary) = NumericSummary::compute(&numbers) {
                stats.min = Some(summary.min);
                stats.max = Some(summary.max);
                stats.mean = Some(summary.mean);
                stats.median = Some(summary.median);
                stats.std = Some(summary.std);
            }
        }
        ColumnType::String | ColumnType::Boolean => {
            let frequencies = count_frequencies(&non_null);
            stats.mode = find_mode(&frequencies, column_type);
            stats.frequencies = Some(frequencies);
        }
        ColumnType::Date | ColumnType::Mixed => {}
    }

    stats
}

/// Fold over value tags: no non-null values or more than one kind → `Mixed`.
fn infer_type(non_null: &[&CellValue]) -> ColumnType {
    let mut inferred = None;
    for value in non_null {
        let kind = match value.kind() {
            Some(kind) => kind,
            None => continue,
        };
        match inferred {
            None => inferred = Some(kind),
            Some(seen) if seen == kind => {}
            Some(_) => return ColumnType::Mixed,
        }
    }
    inferred.unwrap_or(ColumnType::Mixed)
}

struct NumericSummary {
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    std: f64,
}

impl NumericSummary {
    /// Compute min/max/mean/median/population-std; `None` for empty input.
    fn compute(numbers: &[f64]) -> Option<Self> {
        if numbers.is_empty() {
            return None;
        }
        let count = numbers.len() as f64;

        let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = numbers.iter().sum::<f64>() / count;

        let mut sorted = numbers.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let variance = numbers.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
        let std = variance.sqrt();

        Some(Self {
            min,
            max,
            mean,
            median,
            std,
        })
    }
}

/// Occurrence counts keyed by stringified value, in first-seen order.
fn count_frequencies(non_null: &[&CellValue]) -> IndexMap<String, usize> {
    let mut frequencies = IndexMap::new();
    for value in non_null {
        *frequencies.entry(value.to_key_string()).or_insert(0) += 1;
    }
    frequencies
}

/// The value with strictly the highest frequency; ties resolve to whichever
/// value was seen first. Boolean columns get their mode back as a boolean.
fn find_mode(frequencies: &IndexMap<String, usize>, column_type: ColumnType) -> Option<CellValue> {
    let mut max_freq = 0;
    let mut mode: Option<&str> = None;
    for (value, &freq) in frequencies {
        if freq > max_freq {
            max_freq = freq;
            mode = Some(value);
        }
    }

    mode.map(|key| {
        if column_type == ColumnType::Boolean {
            CellValue::Bool(key == "true")
        } else {
            CellValue::Text(key.to_owned())
        }
    })
}
