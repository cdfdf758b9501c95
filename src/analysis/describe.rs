// src/analysis/describe.rs

use crate::analysis::aggregate::mean;
use crate::dataset::{Column, Listing};
use serde::Serialize;

/// One row of the descriptive statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: &'static str,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// count / mean / std / min / quartiles / max for every numeric column.
pub fn describe(listings: &[Listing]) -> Vec<ColumnSummary> {
    Column::ALL
        .into_iter()
        .filter(|c| c.is_numeric())
        .map(|c| summarize(c, listings))
        .collect()
}

fn summarize(column: Column, listings: &[Listing]) -> ColumnSummary {
    let mut values: Vec<f64> = listings.iter().filter_map(|l| column.value(l)).collect();
    values.sort_by(f64::total_cmp);

    ColumnSummary {
        column: column.name(),
        count: values.len(),
        mean: mean(&values),
        std: sample_std(&values),
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        q50: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

/// Sample standard deviation (n - 1). Missing below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Linear-interpolated quantile of already sorted values.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}
