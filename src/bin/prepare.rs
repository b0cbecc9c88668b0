//! Prepare the training data for model fitting.
//!
//! Reads the ingested training table back, splits it into train and
//! validation sets, runs the feature pipeline on both, persists the
//! prepared feature tables, and reports a majority-class baseline score
//! for the prepared split.

use std::env;

use log::info;

use bankrs::config;
use bankrs::error::Result;
use bankrs::io::TableStore;
use bankrs::ml::cleaning::{HandleMissingValues, RemoveOutliers};
use bankrs::ml::features::{
    AddAgeFlag, AddPoutcomeFlag, MapTargetLabels, SelectFeatures, SELECTED_FEATURES, TARGET_COLUMN,
};
use bankrs::ml::models::{label_vector, Classifier, MajorityClass};
use bankrs::ml::pipeline::Pipeline;
use bankrs::ml::split::train_test_split;
use bankrs::schema::TableSchema;
use bankrs::DataFrame;

/// Raw numeric inputs the cleaning steps operate on
const NUMERIC_INPUTS: [&str; 4] = ["duration", "campaign", "pdays", "previous"];

/// Schema of the persisted feature tables: every output column is integer-coded
fn feature_schema() -> TableSchema {
    TableSchema::from_pairs(
        SELECTED_FEATURES
            .iter()
            .chain(std::iter::once(&TARGET_COLUMN))
            .map(|&name| (name, "INTEGER")),
    )
}

fn feature_pipeline() -> Result<Pipeline> {
    let mut pipeline = Pipeline::new();
    pipeline
        .add_transformer(HandleMissingValues::from_name("mean")?.columns(NUMERIC_INPUTS))
        .add_transformer(RemoveOutliers::from_name("iqr")?.columns(NUMERIC_INPUTS))
        .add_transformer(MapTargetLabels::new())
        .add_transformer(AddAgeFlag::new())
        .add_transformer(AddPoutcomeFlag::new())
        .add_transformer(SelectFeatures::new(true));
    Ok(pipeline)
}

fn persist(store: &TableStore, table: &str, frame: &DataFrame) -> Result<()> {
    let schema = feature_schema();
    store.drop_table_if_exists(table)?;
    store.create_table(table, &schema)?;
    let inserted = store.insert_rows(table, &schema, frame)?;
    info!("wrote {} prepared rows into '{}'", inserted, table);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let params_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config/params.yaml".to_string());
    let params = config::read_params_file(&params_path)?;
    let store = TableStore::new(&params.database.path);

    let schema = TableSchema::load(&params.schemas.training_schema_path)?;
    let df = store.select_all(&params.database.train_table_name, &schema)?;
    info!(
        "selected {} rows from '{}'",
        df.row_count(),
        params.database.train_table_name
    );

    let (train_df, validation_df) = train_test_split(
        &df,
        params.training.train_test_split,
        params.training.random_state,
    )?;

    let pipeline = feature_pipeline()?;
    let prepared_train = pipeline.transform(&train_df)?;
    let prepared_validation = pipeline.transform(&validation_df)?;

    let train_table = format!("{}_features", params.database.train_table_name);
    let validation_table = format!("{}_features_validation", params.database.train_table_name);
    persist(&store, &train_table, &prepared_train)?;
    persist(&store, &validation_table, &prepared_validation)?;

    let train_labels = label_vector(&prepared_train, TARGET_COLUMN)?;
    let validation_labels = label_vector(&prepared_validation, TARGET_COLUMN)?;
    let mut baseline = MajorityClass::new();
    baseline.fit(&prepared_train, &train_labels)?;
    let accuracy = baseline.score(&prepared_validation, &validation_labels)?;
    info!("majority-class baseline validation accuracy: {:.3}", accuracy);

    Ok(())
}
