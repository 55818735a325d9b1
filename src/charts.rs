//! Chart-data helpers for presentation layers.
//!
//! These functions reshape a [`DataSet`]'s statistics into name/value pairs
//! suitable for bar charts and histograms. No rendering happens here.

use serde::Serialize;

use crate::types::{CellValue, ColumnStats, DataSet};

/// Number of fixed-width histogram buckets spanning a numeric column's range.
const BUCKET_COUNT: usize = 10;

/// One labeled point of chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Display label (category name or bucket range).
    pub name: String,
    /// Occurrence count.
    pub value: usize,
}

/// Frequency bar-chart data for a categorical column.
///
/// Preserves the profile's first-seen order. Empty for columns without
/// frequency statistics (numeric/mixed columns).
pub fn frequency_data(stats: &ColumnStats) -> Vec<ChartPoint> {
    match &stats.frequencies {
        Some(frequencies) => frequencies
            .iter()
            .map(|(name, &value)| ChartPoint {
                name: name.clone(),
                value,
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Binned histogram data for a numeric column: ten fixed-width buckets
/// spanning min..max.
///
/// Values on the top edge land in the last bucket. A column whose values are
/// all identical has zero range; everything then lands in the first bucket.
/// Returns `None` when the column has no numeric values at all.
pub fn numeric_distribution(dataset: &DataSet, column: &str) -> Option<Vec<ChartPoint>> {
    let values: Vec<f64> = dataset
        .column_values(column)
        .filter_map(|v| match v {
            CellValue::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bucket_size = (max - min) / BUCKET_COUNT as f64;

    let mut buckets = [0usize; BUCKET_COUNT];
    for value in &values {
        let idx = if bucket_size > 0.0 {
            (((value - min) / bucket_size).floor() as usize).min(BUCKET_COUNT - 1)
        } else {
            0
        };
        buckets[idx] += 1;
    }

    Some(
        buckets
            .iter()
            .enumerate()
            .map(|(i, &count)| ChartPoint {
                name: format!(
                    "{:.1} - {:.1}",
                    min + i as f64 * bucket_size,
                    min + (i + 1) as f64 * bucket_size
                ),
                value: count,
            })
            .collect(),
    )
}
