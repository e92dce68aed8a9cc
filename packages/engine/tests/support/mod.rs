#![allow(dead_code)]

use async_trait::async_trait;
use census_engine::{backend_error, CensusBackend, CensusError, QueryResult, SqlDialect, Value};
use rusqlite::{params_from_iter, Connection};
use std::sync::Mutex;

pub const MALE_UNDER_18: [&str; 4] = ["b01001003", "b01001004", "b01001005", "b01001006"];
pub const FEMALE_UNDER_18: [&str; 4] = ["b01001027", "b01001028", "b01001029", "b01001030"];

/// In-memory SQLite store with one attached database per vintage.
///
/// Records every statement the engine issues so tests can assert how many
/// lookups an operation needed.
pub struct FixtureBackend {
    conn: Mutex<Connection>,
    log: Mutex<Vec<String>>,
}

impl FixtureBackend {
    pub fn with_vintages(vintages: &[&str]) -> Self {
        Self::with_locator_type(vintages, "INTEGER")
    }

    /// Declares `logrecno` as TEXT, the way census extracts store it
    /// (`0000001`), so SQLite keeps the zero padding.
    pub fn with_text_locators(vintages: &[&str]) -> Self {
        Self::with_locator_type(vintages, "TEXT")
    }

    fn with_locator_type(vintages: &[&str], locator_type: &str) -> Self {
        let conn = Connection::open_in_memory().expect("in-memory sqlite should open");
        for vintage in vintages {
            conn.execute_batch(&format!(
                "ATTACH DATABASE ':memory:' AS \"{vintage}\";
                 CREATE TABLE \"{vintage}\".geoheader (
                     geoid TEXT NOT NULL,
                     stusab TEXT NOT NULL,
                     logrecno {locator_type} NOT NULL,
                     name TEXT,
                     sumlevel TEXT
                 );
                 CREATE TABLE \"{vintage}\".b01001 (
                     stusab TEXT NOT NULL,
                     logrecno {locator_type} NOT NULL,
                     b01001001 INTEGER,
                     b01001002 INTEGER,
                     b01001003 INTEGER,
                     b01001004 INTEGER,
                     b01001005 INTEGER,
                     b01001006 INTEGER,
                     b01001026 INTEGER,
                     b01001027 INTEGER,
                     b01001028 INTEGER,
                     b01001029 INTEGER,
                     b01001030 INTEGER
                 );"
            ))
            .expect("vintage fixture schema should be created");
        }
        Self {
            conn: Mutex::new(conn),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn insert_geography(
        &self,
        vintage: &str,
        geoid: &str,
        stusab: &str,
        logrecno: impl rusqlite::ToSql,
        name: &str,
        sumlevel: &str,
    ) {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            &format!(
                "INSERT INTO \"{vintage}\".geoheader (geoid, stusab, logrecno, name, sumlevel) \
                 VALUES (?1, ?2, ?3, ?4, ?5)"
            ),
            rusqlite::params![geoid, stusab, logrecno, name, sumlevel],
        )
        .expect("geoheader fixture row should insert");
    }

    /// Inserts a B01001 row; `under_18` holds the four male then four female
    /// under-18 brackets.
    pub fn insert_population(
        &self,
        vintage: &str,
        stusab: &str,
        logrecno: impl rusqlite::ToSql,
        total: Option<i64>,
        under_18: [Option<i64>; 8],
    ) {
        let columns = MALE_UNDER_18
            .iter()
            .chain(FEMALE_UNDER_18.iter())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let conn = self.conn.lock().unwrap();
        conn.execute(
            &format!(
                "INSERT INTO \"{vintage}\".b01001 \
                 (stusab, logrecno, b01001001, b01001002, b01001026, {columns}) \
                 VALUES (?1, ?2, ?3, NULL, NULL, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
            ),
            rusqlite::params![
                stusab,
                logrecno,
                total,
                under_18[0],
                under_18[1],
                under_18[2],
                under_18[3],
                under_18[4],
                under_18[5],
                under_18[6],
                under_18[7],
            ],
        )
        .expect("b01001 fixture row should insert");
    }

    pub fn exec(&self, sql: &str) {
        self.conn
            .lock()
            .unwrap()
            .execute_batch(sql)
            .expect("fixture statement should run");
    }

    pub fn queries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn queries_against(&self, table: &str) -> usize {
        let needle = format!(".\"{table}\"");
        self.queries()
            .iter()
            .filter(|sql| sql.contains(&needle))
            .count()
    }
}

#[async_trait(?Send)]
impl CensusBackend for FixtureBackend {
    fn dialect(&self) -> SqlDialect {
        SqlDialect::Sqlite
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, CensusError> {
        self.log.lock().unwrap().push(sql.to_string());
        let conn = self
            .conn
            .lock()
            .map_err(|_| backend_error("sqlite mutex poisoned"))?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|err| backend_error(err.to_string()))?;
        let columns = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        let bound = params.iter().map(|value| match value {
            Value::Null => rusqlite::types::Value::Null,
            Value::Integer(v) => rusqlite::types::Value::Integer(*v),
            Value::Real(v) => rusqlite::types::Value::Real(*v),
            Value::Text(v) => rusqlite::types::Value::Text(v.clone()),
            Value::Blob(v) => rusqlite::types::Value::Blob(v.clone()),
        });
        let mut rows = stmt
            .query(params_from_iter(bound))
            .map_err(|err| backend_error(err.to_string()))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(|err| backend_error(err.to_string()))? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                let value = row
                    .get_ref(idx)
                    .map_err(|err| backend_error(err.to_string()))?;
                values.push(match value {
                    rusqlite::types::ValueRef::Null => Value::Null,
                    rusqlite::types::ValueRef::Integer(v) => Value::Integer(v),
                    rusqlite::types::ValueRef::Real(v) => Value::Real(v),
                    rusqlite::types::ValueRef::Text(v) => {
                        Value::Text(String::from_utf8_lossy(v).to_string())
                    }
                    rusqlite::types::ValueRef::Blob(v) => Value::Blob(v.to_vec()),
                });
            }
            out.push(values);
        }
        Ok(QueryResult { rows: out, columns })
    }
}
