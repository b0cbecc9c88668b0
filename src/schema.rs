use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Ordered column-name to SQL-datatype mapping loaded from a JSON file
///
/// The schema is the source of truth for generated DDL, INSERT column
/// order, and which columns are integer-typed. Key order in the JSON file
/// is preserved.
#[derive(Debug, Clone)]
pub struct TableSchema {
    columns: Vec<(String, String)>,
}

impl TableSchema {
    /// Load a schema from a JSON object file: `{ "<column>": "<SQL_TYPE>", ... }`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TableSchema> {
        let path = path.as_ref();
        let schema_load = |message: String| Error::SchemaLoad {
            path: path.display().to_string(),
            message,
        };

        let file = File::open(path).map_err(|e| schema_load(e.to_string()))?;
        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| schema_load(e.to_string()))?;

        let object = value
            .as_object()
            .ok_or_else(|| schema_load("expected a JSON object of column -> datatype".to_string()))?;

        let mut columns = Vec::with_capacity(object.len());
        for (name, datatype) in object {
            let datatype = datatype.as_str().ok_or_else(|| {
                schema_load(format!("datatype of column '{}' is not a string", name))
            })?;
            columns.push((name.clone(), datatype.to_string()));
        }

        Ok(TableSchema { columns })
    }

    /// Build a schema directly from (column, datatype) pairs
    pub fn from_pairs<I, S, T>(pairs: I) -> TableSchema
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        TableSchema {
            columns: pairs
                .into_iter()
                .map(|(n, t)| (n.into(), t.into()))
                .collect(),
        }
    }

    /// Column names in schema order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Column names in schema order, double-quoted for use as SQL identifiers
    pub fn quoted_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|(n, _)| format!("\"{}\"", n))
            .collect()
    }

    /// Columns declared exactly as `INTEGER` (full, case-sensitive match)
    pub fn integer_columns(&self) -> HashSet<&str> {
        self.columns
            .iter()
            .filter(|(_, t)| t == "INTEGER")
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Declared datatype of a column
    pub fn datatype(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }

    /// `"name" TYPE, "name" TYPE, ...` for CREATE TABLE, no trailing separator
    ///
    /// An empty schema produces an empty string.
    pub fn column_definition_clause(&self) -> String {
        self.columns
            .iter()
            .map(|(n, t)| format!("\"{}\" {}", n, t))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over (column, datatype) pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }
}
