//! YAML run configuration
//!
//! One params file describes a whole batch run: where the database lives,
//! which tables to load, where the schema and raw CSV files are, and the
//! split settings for training.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level parameters for a batch run
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    pub database: DatabaseParams,
    pub schemas: SchemaParams,
    pub load_data: LoadDataParams,
    #[serde(default)]
    pub training: TrainingParams,
}

/// Database location and target table names
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseParams {
    /// SQLite database file
    pub path: PathBuf,
    pub train_table_name: String,
    pub test_table_name: String,
}

/// Paths to the JSON column schemas
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaParams {
    pub training_schema_path: PathBuf,
    pub prediction_schema_path: PathBuf,
}

/// Paths to the raw CSV datasets
#[derive(Debug, Clone, Deserialize)]
pub struct LoadDataParams {
    pub training_raw_dataset_csv: PathBuf,
    pub testing_raw_dataset_csv: PathBuf,
}

/// Split settings for model training
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingParams {
    /// Validation fraction, strictly between 0 and 1
    #[serde(default = "default_train_test_split")]
    pub train_test_split: f64,
    /// Seed for the shuffled split
    #[serde(default = "default_random_state")]
    pub random_state: u64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        TrainingParams {
            train_test_split: default_train_test_split(),
            random_state: default_random_state(),
        }
    }
}

fn default_train_test_split() -> f64 {
    0.2
}

fn default_random_state() -> u64 {
    42
}

/// Read a YAML parameters file
pub fn read_params_file<P: AsRef<Path>>(path: P) -> Result<Params> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    serde_yaml::from_reader(file).map_err(Error::Yaml)
}
