//! Data cleaning steps: missing-value imputation and outlier handling

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::ml::pipeline::Transformer;
use crate::stats;
use crate::value::DataValue;

/// How to fill missing numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValueStrategy {
    /// Column mean
    Mean,
    /// Column median
    Median,
    /// Most frequent value, smallest first on ties
    Mode,
}

impl FromStr for MissingValueStrategy {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "mean" => Ok(MissingValueStrategy::Mean),
            "median" => Ok(MissingValueStrategy::Median),
            "mode" => Ok(MissingValueStrategy::Mode),
            other => Err(Error::InvalidStrategy(other.to_string())),
        }
    }
}

/// Fill missing values of numeric columns with a per-column statistic
///
/// By default every column is considered; a restricted column list can be
/// given, and each listed column must then exist. Columns with no
/// non-null numeric values are left untouched; text columns are not
/// filled.
#[derive(Debug)]
pub struct HandleMissingValues {
    strategy: MissingValueStrategy,
    columns: Option<Vec<String>>,
}

impl HandleMissingValues {
    pub fn new(strategy: MissingValueStrategy) -> Self {
        HandleMissingValues {
            strategy,
            columns: None,
        }
    }

    /// Parse the strategy name, rejecting unknown names at construction time
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Restrict the step to the given columns
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

impl Transformer for HandleMissingValues {
    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();

        for name in target_columns(df, self.columns.as_deref())? {
            let values = out.column_required(&name)?.to_vec();
            if !values.iter().any(|v| v.is_null()) {
                continue;
            }
            let numeric = numeric_values(&values);
            let fill = match self.strategy {
                MissingValueStrategy::Mean => stats::mean(&numeric),
                MissingValueStrategy::Median => stats::median(&numeric),
                MissingValueStrategy::Mode => stats::mode_first(&numeric),
            };
            let Some(fill) = fill else {
                continue;
            };
            let fill = numeric_cell(fill, &values);

            let filled = values
                .iter()
                .map(|v| if v.is_null() { fill.clone() } else { v.clone() })
                .collect();
            out.set_column(name, filled)?;
        }

        Ok(out)
    }
}

/// How outliers are detected, and what happens to them
///
/// The policy is part of the method: `iqr` clips values into the
/// `[Q1 - k*IQR, Q3 + k*IQR]` fence, `z-score` drops every row where any
/// considered numeric column has `|z| > k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlierMethod {
    /// Interquartile-range fence; offending values are clipped
    Iqr,
    /// Standard-score threshold; offending rows are dropped
    ZScore,
}

impl FromStr for OutlierMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "iqr" => Ok(OutlierMethod::Iqr),
            "z-score" => Ok(OutlierMethod::ZScore),
            other => Err(Error::InvalidMethod(other.to_string())),
        }
    }
}

/// Default fence multiplier / z threshold
pub const DEFAULT_OUTLIER_MULTIPLIER: f64 = 1.5;

/// Bound or drop outlying numeric values per column
#[derive(Debug)]
pub struct RemoveOutliers {
    method: OutlierMethod,
    multiplier: f64,
    columns: Option<Vec<String>>,
}

impl RemoveOutliers {
    pub fn new(method: OutlierMethod) -> Self {
        RemoveOutliers {
            method,
            multiplier: DEFAULT_OUTLIER_MULTIPLIER,
            columns: None,
        }
    }

    /// Parse the method name, rejecting unknown names at construction time
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Override the fence multiplier (for `iqr`) or the z threshold (for `z-score`)
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Restrict the step to the given columns
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

impl Transformer for RemoveOutliers {
    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        match self.method {
            OutlierMethod::Iqr => self.clip_iqr(df),
            OutlierMethod::ZScore => self.drop_zscore(df),
        }
    }
}

impl RemoveOutliers {
    fn clip_iqr(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();

        for name in target_columns(df, self.columns.as_deref())? {
            let values = out.column_required(&name)?.to_vec();
            let numeric = numeric_values(&values);
            let (Some(q1), Some(q3)) =
                (stats::quantile(&numeric, 0.25), stats::quantile(&numeric, 0.75))
            else {
                continue;
            };
            let iqr = q3 - q1;
            let lower = q1 - self.multiplier * iqr;
            let upper = q3 + self.multiplier * iqr;

            let clipped = values
                .iter()
                .map(|v| match v.as_f64() {
                    Some(x) if x < lower => numeric_cell(lower, &values),
                    Some(x) if x > upper => numeric_cell(upper, &values),
                    _ => v.clone(),
                })
                .collect();
            out.set_column(name, clipped)?;
        }

        Ok(out)
    }

    fn drop_zscore(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut keep = vec![true; df.row_count()];

        for name in target_columns(df, self.columns.as_deref())? {
            let values = df.column_required(&name)?;
            let numeric = numeric_values(values);
            let (Some(mean), Some(std)) = (stats::mean(&numeric), stats::std(&numeric)) else {
                continue;
            };
            if std == 0.0 {
                continue;
            }
            for (i, v) in values.iter().enumerate() {
                if let Some(x) = v.as_f64() {
                    if ((x - mean) / std).abs() > self.multiplier {
                        keep[i] = false;
                    }
                }
            }
        }

        df.retain_rows(&keep)
    }
}

/// Columns a cleaning step operates on: the restriction when given
/// (each must exist), otherwise every column of the frame
fn target_columns(df: &DataFrame, restriction: Option<&[String]>) -> Result<Vec<String>> {
    match restriction {
        Some(names) => {
            for name in names {
                df.column_required(name)?;
            }
            Ok(names.to_vec())
        }
        None => Ok(df.column_names().to_vec()),
    }
}

/// Non-null numeric values of a column as f64
fn numeric_values(values: &[DataValue]) -> Vec<f64> {
    values.iter().filter_map(|v| v.as_f64()).collect()
}

/// Wrap a statistic as a cell, keeping integer typing where the column is
/// all-integer and the value has no fraction
fn numeric_cell(value: f64, column: &[DataValue]) -> DataValue {
    let all_int = column
        .iter()
        .filter(|v| v.is_numeric())
        .all(|v| matches!(v, DataValue::Int64(_)));
    if all_int && value.fract() == 0.0 {
        DataValue::Int64(value as i64)
    } else {
        DataValue::Float64(value)
    }
}
