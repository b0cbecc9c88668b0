use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::value::DataValue;

/// Read a headered CSV file into a DataFrame
///
/// Every cell arrives as text; an empty cell becomes `Null`. Declared
/// types are applied later by the coercion step, schema in hand.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(Error::Csv)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<DataValue>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;
        for (i, column) in columns.iter_mut().enumerate() {
            // short rows pad with nulls
            let cell = record.get(i).unwrap_or("");
            column.push(if cell.is_empty() {
                DataValue::Null
            } else {
                DataValue::Text(cell.to_string())
            });
        }
    }

    let mut df = DataFrame::new();
    for (header, values) in headers.into_iter().zip(columns) {
        df.add_column(header, values)?;
    }

    Ok(df)
}
