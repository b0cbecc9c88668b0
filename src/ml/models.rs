//! Model boundary
//!
//! The gradient-boosted classifier and its hyperparameter search live
//! outside this crate; this module fixes the interface the pipeline hands
//! its prepared data to, plus a trivial baseline used for wiring tests.

use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::ml::metrics;

/// A trainable binary classifier
pub trait Classifier {
    /// Fit the model on a feature frame and its labels
    fn fit(&mut self, features: &DataFrame, labels: &[i64]) -> Result<()>;

    /// Predict a label per row of the feature frame
    fn predict(&self, features: &DataFrame) -> Result<Vec<i64>>;

    /// Accuracy of the model on a labeled feature frame
    fn score(&self, features: &DataFrame, labels: &[i64]) -> Result<f64> {
        let predictions = self.predict(features)?;
        metrics::accuracy_score(labels, &predictions)
    }
}

/// Extract an integer label vector from a frame column
pub fn label_vector(df: &DataFrame, column: &str) -> Result<Vec<i64>> {
    df.column_required(column)?
        .iter()
        .map(|v| {
            v.as_i64().ok_or_else(|| {
                Error::InvalidValue(format!("label column '{}' holds non-integer value '{}'", column, v))
            })
        })
        .collect()
}

/// Baseline that always predicts the majority training label
pub struct MajorityClass {
    label: Option<i64>,
}

impl MajorityClass {
    pub fn new() -> Self {
        MajorityClass { label: None }
    }
}

impl Default for MajorityClass {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MajorityClass {
    fn fit(&mut self, _features: &DataFrame, labels: &[i64]) -> Result<()> {
        if labels.is_empty() {
            return Err(Error::EmptyData("cannot fit on zero labels".to_string()));
        }
        let positives = labels.iter().filter(|&&l| l == 1).count();
        self.label = Some(i64::from(positives * 2 >= labels.len()));
        Ok(())
    }

    fn predict(&self, features: &DataFrame) -> Result<Vec<i64>> {
        let label = self
            .label
            .ok_or_else(|| Error::InvalidValue("model is not fitted".to_string()))?;
        Ok(vec![label; features.row_count()])
    }
}
