//! Feature engineering steps for the bank marketing dataset

use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::ml::pipeline::Transformer;
use crate::value::DataValue;

/// Feature columns produced by the pipeline, in output order
pub const SELECTED_FEATURES: [&str; 6] = [
    "duration",
    "campaign",
    "pdays",
    "previous",
    "poutcomeFlag",
    "AgeFlag",
];

/// Default label column of the dataset
pub const TARGET_COLUMN: &str = "y";

/// Map the categorical label column to integers: `"no"` -> 0, `"yes"` -> 1
///
/// Any other value, including a missing one, fails the run; a label
/// outside the vocabulary means the upstream data is broken.
pub struct MapTargetLabels {
    column: String,
}

impl MapTargetLabels {
    /// Map the default `y` column
    pub fn new() -> Self {
        Self::with_column(TARGET_COLUMN)
    }

    /// Map a specific label column
    pub fn with_column<S: Into<String>>(column: S) -> Self {
        MapTargetLabels {
            column: column.into(),
        }
    }
}

impl Default for MapTargetLabels {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer for MapTargetLabels {
    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let values = df.column_required(&self.column)?;
        let mapped = values
            .iter()
            .map(|v| match v.as_str() {
                Some("no") => Ok(DataValue::Int64(0)),
                Some("yes") => Ok(DataValue::Int64(1)),
                _ => Err(Error::UnmappedLabel {
                    column: self.column.clone(),
                    value: v.to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut out = df.clone();
        out.set_column(self.column.clone(), mapped)?;
        Ok(out)
    }
}

/// Add `poutcomeFlag`: 1 where the previous campaign outcome was a success
///
/// Compares the `poutcome` column against `"success"`; every other value
/// (failure, nonexistent, unknown, null) flags 0.
pub struct AddPoutcomeFlag {
    source: String,
}

impl AddPoutcomeFlag {
    pub fn new() -> Self {
        AddPoutcomeFlag {
            source: "poutcome".to_string(),
        }
    }
}

impl Default for AddPoutcomeFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer for AddPoutcomeFlag {
    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let outcomes = df.column_required(&self.source)?;
        let flags = outcomes
            .iter()
            .map(|v| DataValue::Int64(i64::from(v.as_str() == Some("success"))))
            .collect();

        let mut out = df.clone();
        out.set_column("poutcomeFlag", flags)?;
        Ok(out)
    }
}

/// Add `AgeFlag`: 1 for clients aged 61 and over or 18 and under, else 0
///
/// Both bound checks apply; a missing age flags 0.
pub struct AddAgeFlag;

impl AddAgeFlag {
    pub fn new() -> Self {
        AddAgeFlag
    }
}

impl Default for AddAgeFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer for AddAgeFlag {
    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let ages = df.column_required("age")?;
        let flags = ages
            .iter()
            .map(|v| match v.as_f64() {
                Some(age) if age >= 61.0 || age <= 18.0 => DataValue::Int64(1),
                _ => DataValue::Int64(0),
            })
            .collect();

        let mut out = df.clone();
        out.set_column("AgeFlag", flags)?;
        Ok(out)
    }
}

/// Project the dataset down to the model's feature columns
///
/// Output order is fixed by [`SELECTED_FEATURES`]; the label column is
/// appended when `include_target` is set. Any absent column fails with
/// `MissingColumn`.
pub struct SelectFeatures {
    include_target: bool,
}

impl SelectFeatures {
    pub fn new(include_target: bool) -> Self {
        SelectFeatures { include_target }
    }
}

impl Transformer for SelectFeatures {
    fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut names: Vec<&str> = SELECTED_FEATURES.to_vec();
        if self.include_target {
            names.push(TARGET_COLUMN);
        }
        df.select(&names)
    }
}
