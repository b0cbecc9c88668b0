use bankrs::error::Error;
use bankrs::frame::DataFrame;
use bankrs::ml::cleaning::{
    HandleMissingValues, MissingValueStrategy, OutlierMethod, RemoveOutliers,
};
use bankrs::ml::pipeline::Transformer;
use bankrs::value::DataValue;

fn int_column(values: &[i64]) -> Vec<DataValue> {
    values.iter().map(|&v| DataValue::Int64(v)).collect()
}

#[test]
fn test_mean_fill() {
    let df = DataFrame::from_columns([(
        "balance",
        vec![DataValue::Int64(1), DataValue::Null, DataValue::Int64(3)],
    )])
    .unwrap();

    let filled = HandleMissingValues::from_name("mean").unwrap().transform(&df).unwrap();
    assert_eq!(filled.column("balance").unwrap(), &int_column(&[1, 2, 3]));
}

#[test]
fn test_mean_fill_keeps_float_typing() {
    let df = DataFrame::from_columns([(
        "rate",
        vec![DataValue::Float64(1.0), DataValue::Null, DataValue::Float64(2.0)],
    )])
    .unwrap();

    let filled = HandleMissingValues::new(MissingValueStrategy::Mean)
        .transform(&df)
        .unwrap();
    assert_eq!(filled.column("rate").unwrap()[1], DataValue::Float64(1.5));
}

#[test]
fn test_median_fill() {
    let df = DataFrame::from_columns([(
        "balance",
        vec![
            DataValue::Int64(1),
            DataValue::Null,
            DataValue::Int64(3),
            DataValue::Int64(4),
        ],
    )])
    .unwrap();

    let filled = HandleMissingValues::new(MissingValueStrategy::Median)
        .transform(&df)
        .unwrap();
    assert_eq!(filled.column("balance").unwrap()[1], DataValue::Int64(3));
}

#[test]
fn test_mode_fill_takes_smallest_on_ties() {
    let df = DataFrame::from_columns([(
        "campaign",
        vec![
            DataValue::Int64(2),
            DataValue::Int64(1),
            DataValue::Int64(2),
            DataValue::Int64(1),
            DataValue::Null,
        ],
    )])
    .unwrap();

    let filled = HandleMissingValues::new(MissingValueStrategy::Mode)
        .transform(&df)
        .unwrap();
    assert_eq!(filled.column("campaign").unwrap()[4], DataValue::Int64(1));
}

#[test]
fn test_all_null_column_is_left_untouched() {
    let df = DataFrame::from_columns([("empty", vec![DataValue::Null, DataValue::Null])]).unwrap();

    let filled = HandleMissingValues::new(MissingValueStrategy::Mean)
        .transform(&df)
        .unwrap();
    assert_eq!(filled.column("empty").unwrap(), &[DataValue::Null, DataValue::Null]);
}

#[test]
fn test_text_columns_are_not_filled() {
    let df = DataFrame::from_columns([(
        "job",
        vec![DataValue::Text("admin".to_string()), DataValue::Null],
    )])
    .unwrap();

    let filled = HandleMissingValues::new(MissingValueStrategy::Mean)
        .transform(&df)
        .unwrap();
    assert_eq!(filled.column("job").unwrap()[1], DataValue::Null);
}

#[test]
fn test_unknown_strategy_fails_at_construction() {
    let err = HandleMissingValues::from_name("bogus").unwrap_err();
    assert!(matches!(err, Error::InvalidStrategy(name) if name == "bogus"));
}

#[test]
fn test_restricted_columns_must_exist() {
    let df = DataFrame::from_columns([("balance", int_column(&[1, 2]))]).unwrap();

    let step = HandleMissingValues::new(MissingValueStrategy::Mean).columns(["missing"]);
    assert!(matches!(step.transform(&df), Err(Error::MissingColumn(_))));
}

#[test]
fn test_iqr_clips_outlier_into_fence() {
    // Q1 = 2, Q3 = 4, IQR = 2, fence = [-1, 7]
    let df = DataFrame::from_columns([("duration", int_column(&[1, 2, 3, 4, 100]))]).unwrap();

    let cleaned = RemoveOutliers::new(OutlierMethod::Iqr).transform(&df).unwrap();
    assert_eq!(cleaned.column("duration").unwrap(), &int_column(&[1, 2, 3, 4, 7]));
    assert_eq!(cleaned.row_count(), 5);
}

#[test]
fn test_iqr_leaves_unremarkable_data_unchanged() {
    let df = DataFrame::from_columns([("duration", int_column(&[1, 2, 3, 4, 5]))]).unwrap();

    let cleaned = RemoveOutliers::new(OutlierMethod::Iqr).transform(&df).unwrap();
    assert_eq!(cleaned.column("duration").unwrap(), &int_column(&[1, 2, 3, 4, 5]));
}

#[test]
fn test_iqr_ignores_nulls_and_text() {
    let df = DataFrame::from_columns([
        (
            "duration",
            vec![
                DataValue::Int64(1),
                DataValue::Null,
                DataValue::Int64(2),
                DataValue::Int64(3),
                DataValue::Int64(4),
                DataValue::Int64(100),
            ],
        ),
        (
            "job",
            vec![
                DataValue::Text("a".to_string()),
                DataValue::Text("b".to_string()),
                DataValue::Text("c".to_string()),
                DataValue::Text("d".to_string()),
                DataValue::Text("e".to_string()),
                DataValue::Text("f".to_string()),
            ],
        ),
    ])
    .unwrap();

    let cleaned = RemoveOutliers::new(OutlierMethod::Iqr).transform(&df).unwrap();
    assert_eq!(cleaned.column("duration").unwrap()[1], DataValue::Null);
    assert_eq!(cleaned.column("job").unwrap()[0], DataValue::Text("a".to_string()));
}

#[test]
fn test_zscore_drops_outlying_rows() {
    let df = DataFrame::from_columns([(
        "duration",
        int_column(&[10, 10, 10, 10, 10, 1000]),
    )])
    .unwrap();

    let cleaned = RemoveOutliers::new(OutlierMethod::ZScore).transform(&df).unwrap();
    assert_eq!(cleaned.row_count(), 5);
    assert_eq!(cleaned.column("duration").unwrap(), &int_column(&[10, 10, 10, 10, 10]));
}

#[test]
fn test_zscore_constant_column_is_a_no_op() {
    let df = DataFrame::from_columns([("duration", int_column(&[5, 5, 5, 5]))]).unwrap();

    let cleaned = RemoveOutliers::new(OutlierMethod::ZScore).transform(&df).unwrap();
    assert_eq!(cleaned.row_count(), 4);
}

#[test]
fn test_unknown_method_fails_at_construction() {
    let err = RemoveOutliers::from_name("bogus").unwrap_err();
    assert!(matches!(err, Error::InvalidMethod(name) if name == "bogus"));
}

#[test]
fn test_outlier_step_respects_column_restriction() {
    let df = DataFrame::from_columns([
        ("duration", int_column(&[1, 2, 3, 4, 100])),
        ("flag", int_column(&[0, 0, 0, 0, 1])),
    ])
    .unwrap();

    let cleaned = RemoveOutliers::new(OutlierMethod::Iqr)
        .columns(["duration"])
        .transform(&df)
        .unwrap();

    assert_eq!(cleaned.column("duration").unwrap()[4], DataValue::Int64(7));
    // the restricted step must not touch the flag column
    assert_eq!(cleaned.column("flag").unwrap()[4], DataValue::Int64(1));
}
