//! Load the raw CSV datasets into the table store.
//!
//! For each of the train and test datasets: load the JSON column schema,
//! create the table, read the raw CSV, coerce the declared INTEGER
//! columns, and insert the rows.

use std::env;
use std::path::Path;

use log::info;

use bankrs::coerce::coerce_integer_columns;
use bankrs::config;
use bankrs::error::Result;
use bankrs::io::{read_csv, TableStore};
use bankrs::schema::TableSchema;

fn load_dataset(store: &TableStore, table: &str, schema_path: &Path, csv_path: &Path) -> Result<()> {
    let schema = TableSchema::load(schema_path)?;
    store.create_table(table, &schema)?;

    let raw = read_csv(csv_path)?;
    let coerced = coerce_integer_columns(&raw, &schema)?;
    let inserted = store.insert_rows(table, &schema, &coerced)?;
    info!("loaded {} rows from {} into '{}'", inserted, csv_path.display(), table);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let params_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config/params.yaml".to_string());
    let params = config::read_params_file(&params_path)?;
    let store = TableStore::new(&params.database.path);

    load_dataset(
        &store,
        &params.database.train_table_name,
        &params.schemas.training_schema_path,
        &params.load_data.training_raw_dataset_csv,
    )?;
    load_dataset(
        &store,
        &params.database.test_table_name,
        &params.schemas.prediction_schema_path,
        &params.load_data.testing_raw_dataset_csv,
    )?;

    Ok(())
}
