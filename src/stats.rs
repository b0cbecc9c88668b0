//! Descriptive statistics backing the cleaning and outlier steps

use crate::error::{Error, Result};

/// Summary statistics of a numeric sample
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (0.0 below two observations)
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// 25% quantile
    pub q1: f64,
    /// Median (50% quantile)
    pub median: f64,
    /// 75% quantile
    pub q3: f64,
    /// Maximum
    pub max: f64,
}

/// Arithmetic mean; `None` on an empty sample
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (n - 1 denominator); `None` below two observations
pub fn std(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let var = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    Some(var.sqrt())
}

/// Median; `None` on an empty sample
pub fn median(data: &[f64]) -> Option<f64> {
    quantile(data, 0.5)
}

/// Linearly interpolated quantile, `q` in [0, 1]; `None` on an empty sample
pub fn quantile(data: &[f64], q: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = rank - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Most frequent value, smallest first on ties; `None` on an empty sample
pub fn mode_first(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut current = sorted[0];
    let mut count = 0usize;
    for &x in &sorted {
        if x == current {
            count += 1;
        } else {
            current = x;
            count = 1;
        }
        // strict comparison keeps the smallest value on ties
        if count > best_count {
            best = current;
            best_count = count;
        }
    }
    Some(best)
}

/// Compute the full descriptive summary of a sample
pub fn describe(data: &[f64]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(Error::EmptyData("describe requires at least one value".to_string()));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(DescriptiveStats {
        count: data.len(),
        mean: mean(data).unwrap_or(0.0),
        std: std(data).unwrap_or(0.0),
        min: sorted[0],
        q1: quantile(data, 0.25).unwrap_or(sorted[0]),
        median: quantile(data, 0.5).unwrap_or(sorted[0]),
        q3: quantile(data, 0.75).unwrap_or(sorted[0]),
        max: sorted[sorted.len() - 1],
    })
}
