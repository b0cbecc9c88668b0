use tempfile::TempDir;

use bankrs::error::Error;
use bankrs::frame::DataFrame;
use bankrs::io::TableStore;
use bankrs::schema::TableSchema;
use bankrs::value::DataValue;

fn bank_schema() -> TableSchema {
    TableSchema::from_pairs([("age", "INTEGER"), ("job", "VARCHAR(50)"), ("balance", "INTEGER")])
}

fn sample_frame() -> DataFrame {
    DataFrame::from_columns([
        (
            "age",
            vec![DataValue::Int64(33), DataValue::Null, DataValue::Int64(58)],
        ),
        (
            "job",
            vec![
                DataValue::Text("admin".to_string()),
                DataValue::Text("services".to_string()),
                DataValue::Null,
            ],
        ),
        (
            "balance",
            vec![DataValue::Int64(100), DataValue::Int64(-12), DataValue::Int64(0)],
        ),
    ])
    .unwrap()
}

fn scratch_store(dir: &TempDir) -> TableStore {
    TableStore::new(dir.path().join("bank.db"))
}

#[test]
fn test_create_insert_select_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = bank_schema();

    store.create_table("bank_marketing", &schema).unwrap();
    let inserted = store.insert_rows("bank_marketing", &schema, &sample_frame()).unwrap();
    assert_eq!(inserted, 3);

    let df = store.select_all("bank_marketing", &schema).unwrap();
    assert_eq!(df.row_count(), 3);
    // columns come back in schema order
    assert_eq!(df.column_names(), &["age", "job", "balance"]);
    assert_eq!(
        df.column("age").unwrap(),
        &[DataValue::Int64(33), DataValue::Null, DataValue::Int64(58)]
    );
    assert_eq!(df.column("job").unwrap()[2], DataValue::Null);
    assert_eq!(df.column("balance").unwrap()[1], DataValue::Int64(-12));
}

#[test]
fn test_create_table_twice_fails() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = bank_schema();

    store.create_table("bank_marketing", &schema).unwrap();
    let err = store.create_table("bank_marketing", &schema).unwrap_err();
    assert!(matches!(err, Error::TableExists(name) if name == "bank_marketing"));
}

#[test]
fn test_create_table_rejects_empty_schema() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = TableSchema::from_pairs(Vec::<(String, String)>::new());

    assert!(matches!(
        store.create_table("empty", &schema),
        Err(Error::EmptyData(_))
    ));
}

#[test]
fn test_insert_requires_every_schema_column() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = bank_schema();
    store.create_table("bank_marketing", &schema).unwrap();

    // frame without the balance column
    let df = DataFrame::from_columns([
        ("age", vec![DataValue::Int64(33)]),
        ("job", vec![DataValue::Text("admin".to_string())]),
    ])
    .unwrap();

    assert!(matches!(
        store.insert_rows("bank_marketing", &schema, &df),
        Err(Error::MissingColumn(name)) if name == "balance"
    ));
}

#[test]
fn test_extra_frame_columns_are_ignored_on_insert() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = TableSchema::from_pairs([("age", "INTEGER")]);
    store.create_table("ages", &schema).unwrap();

    let df = DataFrame::from_columns([
        ("age", vec![DataValue::Int64(33)]),
        ("ignored", vec![DataValue::Text("x".to_string())]),
    ])
    .unwrap();

    assert_eq!(store.insert_rows("ages", &schema, &df).unwrap(), 1);
    let back = store.select_all("ages", &schema).unwrap();
    assert_eq!(back.column_names(), &["age"]);
}

#[test]
fn test_select_from_empty_table() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = bank_schema();
    store.create_table("bank_marketing", &schema).unwrap();

    let df = store.select_all("bank_marketing", &schema).unwrap();
    assert_eq!(df.row_count(), 0);
    assert_eq!(df.column_count(), 3);
}

#[test]
fn test_table_exists_and_drop() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = bank_schema();

    assert!(!store.table_exists("bank_marketing").unwrap());
    store.create_table("bank_marketing", &schema).unwrap();
    assert!(store.table_exists("bank_marketing").unwrap());

    store.drop_table_if_exists("bank_marketing").unwrap();
    assert!(!store.table_exists("bank_marketing").unwrap());
    // dropping an absent table is fine
    store.drop_table_if_exists("bank_marketing").unwrap();
}

#[test]
fn test_float_values_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = scratch_store(&dir);
    let schema = TableSchema::from_pairs([("rate", "REAL")]);
    store.create_table("rates", &schema).unwrap();

    let df = DataFrame::from_columns([(
        "rate",
        vec![DataValue::Float64(1.5), DataValue::Null],
    )])
    .unwrap();
    store.insert_rows("rates", &schema, &df).unwrap();

    let back = store.select_all("rates", &schema).unwrap();
    assert_eq!(
        back.column("rate").unwrap(),
        &[DataValue::Float64(1.5), DataValue::Null]
    );
}
