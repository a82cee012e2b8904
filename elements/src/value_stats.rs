// Copyright (c) 2024 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use statistical;

/// Summary of one numeric column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DescriptiveStats {
    // Number of finite values the statistics were computed over.
    pub count: usize,

    pub min: f64,
    pub max: f64,
    pub mean: f64,

    // Sample standard deviation; zero when count is 1.
    pub stddev: f64,

    pub median: f64,
    pub median_absolute_deviation: f64,
}

/// Computes descriptive statistics over the finite entries of `values`.
/// Non-finite entries (e.g. the infinite distance of a zero parallax) are
/// skipped. Returns None if no finite entries remain.
pub fn describe(values: &[f64]) -> Option<DescriptiveStats> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let min = *finite.iter().min_by(|a, b| a.total_cmp(b))?;
    let max = *finite.iter().max_by(|a, b| a.total_cmp(b))?;
    let mean = statistical::mean(&finite);
    let stddev = if finite.len() > 1 {
        statistical::standard_deviation(&finite, Some(mean))
    } else {
        0.0
    };
    let median = statistical::median(&finite);
    let deviations: Vec<f64> = finite.iter().map(|v| (v - median).abs()).collect();
    let median_absolute_deviation = statistical::median(&deviations);

    Some(DescriptiveStats {
        count: finite.len(),
        min,
        max,
        mean,
        stddev,
        median,
        median_absolute_deviation,
    })
}
