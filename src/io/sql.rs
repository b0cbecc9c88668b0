use std::path::{Path, PathBuf};

use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{params_from_iter, Connection};

use crate::error::{Error, Result};
use crate::frame::DataFrame;
use crate::schema::TableSchema;
use crate::value::DataValue;

impl ToSql for DataValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            DataValue::Int64(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            DataValue::Float64(v) => ToSqlOutput::Owned(Value::Real(*v)),
            DataValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            DataValue::Null => ToSqlOutput::Owned(Value::Null),
        })
    }
}

/// SQLite-backed relational store, parameterized by a [`TableSchema`]
///
/// Every method is one logical unit of work: it opens its own connection
/// and releases it on return. All statements are parameterized; values
/// are never interpolated into SQL text.
pub struct TableStore {
    db_path: PathBuf,
}

impl TableStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        TableStore {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).map_err(Error::from)
    }

    fn exists_in(conn: &Connection, table: &str) -> Result<bool> {
        let mut stmt =
            conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")?;
        Ok(stmt.exists([table])?)
    }

    /// Whether the table exists
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let conn = self.connect()?;
        Self::exists_in(&conn, table)
    }

    /// Create a table from the schema's column definitions
    ///
    /// Fails with `TableExists` when the table is already present, and
    /// refuses a zero-column schema rather than emitting malformed DDL.
    pub fn create_table(&self, table: &str, schema: &TableSchema) -> Result<()> {
        if schema.is_empty() {
            return Err(Error::EmptyData(format!(
                "cannot create table '{}' from an empty schema",
                table
            )));
        }
        let conn = self.connect()?;
        if Self::exists_in(&conn, table)? {
            return Err(Error::TableExists(table.to_string()));
        }
        let ddl = format!(
            "CREATE TABLE \"{}\" ({})",
            table,
            schema.column_definition_clause()
        );
        conn.execute(&ddl, [])?;
        Ok(())
    }

    /// Drop the table when present
    pub fn drop_table_if_exists(&self, table: &str) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(&format!("DROP TABLE IF EXISTS \"{}\"", table), [])?;
        Ok(())
    }

    /// Insert every frame row, in schema column order, inside one transaction
    ///
    /// Every schema column must be present in the frame; extra frame
    /// columns are ignored. Returns the number of rows inserted.
    pub fn insert_rows(&self, table: &str, schema: &TableSchema, df: &DataFrame) -> Result<usize> {
        if schema.is_empty() {
            return Err(Error::EmptyData(format!(
                "cannot insert into table '{}' with an empty schema",
                table
            )));
        }
        let columns: Vec<&[DataValue]> = schema
            .column_names()
            .iter()
            .map(|name| df.column_required(name))
            .collect::<Result<_>>()?;

        let placeholders = vec!["?"; schema.len()].join(", ");
        let insert_sql = format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            table,
            schema.quoted_column_names().join(", "),
            placeholders
        );

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut inserted = 0usize;
        {
            let mut stmt = tx.prepare(&insert_sql)?;
            for row in 0..df.row_count() {
                stmt.execute(params_from_iter(columns.iter().map(|col| &col[row])))?;
                inserted += 1;
            }
        }
        tx.commit()?;

        Ok(inserted)
    }

    /// Read the whole table back, columns in schema order
    pub fn select_all(&self, table: &str, schema: &TableSchema) -> Result<DataFrame> {
        if schema.is_empty() {
            return Err(Error::EmptyData(format!(
                "cannot select from table '{}' with an empty schema",
                table
            )));
        }
        let conn = self.connect()?;
        let select_sql = format!(
            "SELECT {} FROM \"{}\"",
            schema.quoted_column_names().join(", "),
            table
        );
        let mut stmt = conn.prepare(&select_sql)?;

        let names = schema.column_names();
        let mut columns: Vec<Vec<DataValue>> = vec![Vec::new(); names.len()];
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            for (i, column) in columns.iter_mut().enumerate() {
                let value = match row.get_ref(i)? {
                    ValueRef::Null => DataValue::Null,
                    ValueRef::Integer(v) => DataValue::Int64(v),
                    ValueRef::Real(v) => DataValue::Float64(v),
                    ValueRef::Text(t) => DataValue::Text(String::from_utf8_lossy(t).into_owned()),
                    ValueRef::Blob(_) => {
                        return Err(Error::InvalidValue(format!(
                            "column '{}' holds a BLOB value",
                            names[i]
                        )))
                    }
                };
                column.push(value);
            }
        }

        let mut df = DataFrame::new();
        for (name, values) in names.into_iter().zip(columns) {
            df.add_column(name, values)?;
        }
        Ok(df)
    }
}
