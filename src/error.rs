use thiserror::Error;

/// Error type for the whole pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load schema from {path}: {message}")]
    SchemaLoad { path: String, message: String },

    #[error("column '{column}': cannot coerce value '{value}' to INTEGER")]
    Coercion { column: String, value: String },

    #[error("invalid missing-value strategy: {0}")]
    InvalidStrategy(String),

    #[error("invalid outlier method: {0}")]
    InvalidMethod(String),

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("column '{column}': unmapped label value '{value}'")]
    UnmappedLabel { column: String, value: String },

    #[error("table already exists: {0}")]
    TableExists(String),

    #[error("column name is duplicated: {0}")]
    DuplicateColumnName(String),

    #[error("row count mismatch: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("empty data: {0}")]
    EmptyData(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("YAML error")]
    Yaml(#[source] serde_yaml::Error),

    #[error("database error")]
    Sql(#[source] rusqlite::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Sql(err)
    }
}
