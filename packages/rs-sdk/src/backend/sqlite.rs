use async_trait::async_trait;
use census_engine::{
    backend_error, CensusBackend, CensusError, QueryResult, SqlDialect, Value, Vintage,
    VintageCatalog,
};
use rusqlite::{params_from_iter, Connection, Row};
use std::path::Path;
use std::sync::Mutex;

/// File extension of per-vintage database files in a data directory.
pub const VINTAGE_FILE_EXTENSION: &str = "sqlite";

/// SQLite store where each vintage is an attached database.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    pub fn in_memory() -> Result<Self, CensusError> {
        let conn = Connection::open_in_memory().map_err(|err| backend_error(err.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory main database and attaches every
    /// `<vintage>.sqlite` file found in `dir` under its vintage name.
    pub fn open_data_dir(dir: &Path, catalog: &VintageCatalog) -> Result<Self, CensusError> {
        if !dir.is_dir() {
            return Err(backend_error(format!(
                "data directory does not exist: {}",
                dir.display()
            )));
        }
        let backend = Self::in_memory()?;
        let mut attached = 0usize;
        for vintage in catalog.iter() {
            let path = dir.join(format!("{}.{VINTAGE_FILE_EXTENSION}", vintage.id()));
            if !path.is_file() {
                tracing::debug!(%vintage, path = %path.display(), "vintage file not present");
                continue;
            }
            backend.attach(vintage, &path)?;
            attached += 1;
        }
        tracing::info!(dir = %dir.display(), attached, "opened sqlite data directory");
        Ok(backend)
    }

    /// Attaches `path` as the namespace of `vintage`.
    pub fn attach(&self, vintage: &Vintage, path: &Path) -> Result<(), CensusError> {
        let conn = self.lock()?;
        conn.execute(
            &format!("ATTACH DATABASE ?1 AS \"{}\"", vintage.id()),
            [path.to_string_lossy().as_ref()],
        )
        .map_err(|err| {
            backend_error(format!(
                "failed to attach {} as {vintage}: {err}",
                path.display()
            ))
        })?;
        Ok(())
    }

    /// Runs a semicolon separated script without parameters.
    pub fn execute_batch(&self, sql: &str) -> Result<(), CensusError> {
        self.lock()?
            .execute_batch(sql)
            .map_err(|err| backend_error(err.to_string()))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, CensusError> {
        self.conn
            .lock()
            .map_err(|_| backend_error("sqlite mutex poisoned"))
    }
}

#[async_trait(?Send)]
impl CensusBackend for SqliteBackend {
    fn dialect(&self) -> SqlDialect {
        SqlDialect::Sqlite
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, CensusError> {
        let conn = self.lock()?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|err| backend_error(err.to_string()))?;
        let columns = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        let bound_params = params.iter().cloned().map(to_sql_value);
        let mut rows = stmt
            .query(params_from_iter(bound_params))
            .map_err(|err| backend_error(err.to_string()))?;
        let mut result_rows = Vec::new();
        while let Some(row) = rows.next().map_err(|err| backend_error(err.to_string()))? {
            result_rows.push(map_row(row)?);
        }
        Ok(QueryResult {
            rows: result_rows,
            columns,
        })
    }
}

fn map_row(row: &Row<'_>) -> Result<Vec<Value>, CensusError> {
    let mut values = Vec::new();
    for idx in 0..row.as_ref().column_count() {
        let value = row
            .get_ref(idx)
            .map_err(|err| backend_error(err.to_string()))?;
        values.push(match value {
            rusqlite::types::ValueRef::Null => Value::Null,
            rusqlite::types::ValueRef::Integer(value) => Value::Integer(value),
            rusqlite::types::ValueRef::Real(value) => Value::Real(value),
            rusqlite::types::ValueRef::Text(value) => {
                Value::Text(String::from_utf8_lossy(value).to_string())
            }
            rusqlite::types::ValueRef::Blob(value) => Value::Blob(value.to_vec()),
        });
    }
    Ok(values)
}

fn to_sql_value(value: Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Integer(value) => rusqlite::types::Value::Integer(value),
        Value::Real(value) => rusqlite::types::Value::Real(value),
        Value::Text(value) => rusqlite::types::Value::Text(value),
        Value::Blob(value) => rusqlite::types::Value::Blob(value),
    }
}
