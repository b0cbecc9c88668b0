use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::value::DataValue;

/// In-memory tabular dataset
///
/// Columns are stored by name with an explicit ordering vector, since the
/// column order is load-bearing: generated DDL, INSERT statements, and
/// feature selection all follow it. All columns have the same length.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    data: HashMap<String, Vec<DataValue>>,
    /// Column insertion order
    columns: Vec<String>,
    row_count: usize,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        DataFrame {
            data: HashMap::new(),
            columns: Vec::new(),
            row_count: 0,
        }
    }

    /// Build a DataFrame from (name, values) pairs, preserving their order
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<DataValue>)>,
        S: Into<String>,
    {
        let mut df = DataFrame::new();
        for (name, values) in columns {
            df.add_column(name, values)?;
        }
        Ok(df)
    }

    /// Append a new column
    ///
    /// Fails on a duplicate name or on a length that does not match the
    /// rows already present.
    pub fn add_column<S: Into<String>>(&mut self, name: S, values: Vec<DataValue>) -> Result<()> {
        let name = name.into();
        if self.data.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }
        if self.columns.is_empty() {
            self.row_count = values.len();
        } else if values.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: values.len(),
            });
        }
        self.columns.push(name.clone());
        self.data.insert(name, values);
        Ok(())
    }

    /// Insert or overwrite a column, keeping the original position when the
    /// name already exists
    pub fn set_column<S: Into<String>>(&mut self, name: S, values: Vec<DataValue>) -> Result<()> {
        let name = name.into();
        if !self.data.contains_key(&name) {
            return self.add_column(name, values);
        }
        if values.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: values.len(),
            });
        }
        self.data.insert(name, values);
        Ok(())
    }

    /// Column values by name
    pub fn column(&self, name: &str) -> Option<&[DataValue]> {
        self.data.get(name).map(|v| v.as_slice())
    }

    /// Column values by name, failing with `MissingColumn`
    pub fn column_required(&self, name: &str) -> Result<&[DataValue]> {
        self.column(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Column names in order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the frame holds no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Project the frame down to the named columns, in the given order
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let mut out = DataFrame::new();
        for &name in names {
            let values = self.column_required(name)?;
            out.add_column(name, values.to_vec())?;
        }
        Ok(out)
    }

    /// New frame containing the given rows, in index order
    pub fn take(&self, indices: &[usize]) -> Result<DataFrame> {
        for &idx in indices {
            if idx >= self.row_count {
                return Err(Error::InvalidValue(format!(
                    "row index {} out of range for {} rows",
                    idx, self.row_count
                )));
            }
        }
        let mut out = DataFrame::new();
        for name in &self.columns {
            let values = &self.data[name];
            let taken: Vec<DataValue> = indices.iter().map(|&i| values[i].clone()).collect();
            out.add_column(name.clone(), taken)?;
        }
        Ok(out)
    }

    /// New frame keeping only the rows whose mask entry is true
    pub fn retain_rows(&self, keep: &[bool]) -> Result<DataFrame> {
        if keep.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: keep.len(),
            });
        }
        let indices: Vec<usize> = keep
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| if k { Some(i) } else { None })
            .collect();
        self.take(&indices)
    }

    /// Values of one row, in column order
    pub fn row(&self, idx: usize) -> Option<Vec<&DataValue>> {
        if idx >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|name| &self.data[name][idx]).collect())
    }
}
