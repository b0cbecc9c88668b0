use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::schema::TableSchema;
use crate::value::DataValue;

/// Cell contents treated as "no value" when coercing raw text columns
const NA_SENTINELS: [&str; 6] = ["", "NA", "NaN", "nan", "null", "NULL"];

/// Coerce every schema-declared INTEGER column to nullable Int64
///
/// Not-a-number sentinels become `Null`; everything else must parse as a
/// 64-bit integer (floats with a zero fraction are accepted, since raw
/// numeric text often arrives as `33.0`). Schema columns absent from the
/// frame are skipped; presence is enforced at insert time. Idempotent.
pub fn coerce_integer_columns(df: &DataFrame, schema: &TableSchema) -> Result<DataFrame> {
    let integer_columns = schema.integer_columns();
    let mut out = df.clone();

    for name in df.column_names().to_vec() {
        if !integer_columns.contains(name.as_str()) {
            continue;
        }
        let Some(values) = df.column(&name) else {
            continue;
        };
        let coerced = values
            .iter()
            .map(|v| coerce_cell(&name, v))
            .collect::<Result<Vec<_>>>()?;
        out.set_column(name, coerced)?;
    }

    Ok(out)
}

fn coerce_cell(column: &str, value: &DataValue) -> Result<DataValue> {
    let coercion = || Error::Coercion {
        column: column.to_string(),
        value: value.to_string(),
    };

    match value {
        DataValue::Null => Ok(DataValue::Null),
        DataValue::Int64(v) => Ok(DataValue::Int64(*v)),
        DataValue::Float64(v) => {
            if v.is_nan() {
                Ok(DataValue::Null)
            } else if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v <= i64::MAX as f64 {
                Ok(DataValue::Int64(*v as i64))
            } else {
                Err(coercion())
            }
        }
        DataValue::Text(s) => {
            let trimmed = s.trim();
            if NA_SENTINELS.contains(&trimmed) {
                return Ok(DataValue::Null);
            }
            if let Ok(v) = trimmed.parse::<i64>() {
                return Ok(DataValue::Int64(v));
            }
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_nan() => Ok(DataValue::Null),
                Ok(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 => {
                    Ok(DataValue::Int64(v as i64))
                }
                _ => Err(coercion()),
            }
        }
    }
}

/// Wrap non-null values of declared VARCHAR columns in single quotes
///
/// Only serves the legacy literal-SQL generation path; `TableStore` uses
/// parameterized statements and never calls this. Embedded quotes are
/// doubled, nulls pass through unchanged. The VARCHAR check is a
/// case-insensitive prefix match, so `VARCHAR(20)` and `varchar(8)` both
/// qualify.
pub fn quote_text_columns(df: &DataFrame, schema: &TableSchema) -> Result<DataFrame> {
    let mut out = df.clone();

    for (name, datatype) in schema.iter() {
        if !datatype.to_ascii_lowercase().starts_with("varchar") {
            continue;
        }
        let Some(values) = df.column(name) else {
            continue;
        };
        let quoted = values
            .iter()
            .map(|v| match v {
                DataValue::Null => DataValue::Null,
                other => DataValue::Text(format!("'{}'", other.to_string().replace('\'', "''"))),
            })
            .collect();
        out.set_column(name, quoted)?;
    }

    Ok(out)
}
