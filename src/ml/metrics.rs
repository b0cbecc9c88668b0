//! Evaluation metrics for binary classification

use crate::error::{Error, Result};

fn check_lengths(y_true: &[i64], y_pred: &[i64]) -> Result<()> {
    if y_true.is_empty() {
        return Err(Error::EmptyData("metrics require at least one label".to_string()));
    }
    if y_true.len() != y_pred.len() {
        return Err(Error::InconsistentRowCount {
            expected: y_true.len(),
            found: y_pred.len(),
        });
    }
    Ok(())
}

/// Fraction of predictions matching the true labels
pub fn accuracy_score(y_true: &[i64], y_pred: &[i64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Precision for the positive label; 0.0 when nothing was predicted positive
pub fn precision_score(y_true: &[i64], y_pred: &[i64], positive_label: i64) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let mut true_positive = 0usize;
    let mut false_positive = 0usize;
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        if *p == positive_label {
            if *t == positive_label {
                true_positive += 1;
            } else {
                false_positive += 1;
            }
        }
    }
    if true_positive + false_positive == 0 {
        Ok(0.0)
    } else {
        Ok(true_positive as f64 / (true_positive + false_positive) as f64)
    }
}

/// Recall for the positive label; 0.0 when no true positives exist
pub fn recall_score(y_true: &[i64], y_pred: &[i64], positive_label: i64) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let mut true_positive = 0usize;
    let mut false_negative = 0usize;
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        if *t == positive_label {
            if *p == positive_label {
                true_positive += 1;
            } else {
                false_negative += 1;
            }
        }
    }
    if true_positive + false_negative == 0 {
        Ok(0.0)
    } else {
        Ok(true_positive as f64 / (true_positive + false_negative) as f64)
    }
}

/// Harmonic mean of precision and recall; 0.0 when both are 0
pub fn f1_score(y_true: &[i64], y_pred: &[i64], positive_label: i64) -> Result<f64> {
    let precision = precision_score(y_true, y_pred, positive_label)?;
    let recall = recall_score(y_true, y_pred, positive_label)?;
    if precision + recall == 0.0 {
        Ok(0.0)
    } else {
        Ok(2.0 * precision * recall / (precision + recall))
    }
}
