use async_trait::async_trait;
use census_engine::{backend_error, CensusBackend, CensusError, QueryResult, SqlDialect, Value};
use sqlx::postgres::{PgArguments, PgColumn, PgPool, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Executor, Postgres, Row, TypeInfo, ValueRef};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 4,
        }
    }
}

/// PostgreSQL store where each vintage is a schema.
pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    pub async fn connect(config: &PostgresConfig) -> Result<Self, CensusError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|err| backend_error(format!("failed to connect to postgres: {err}")))?;
        Ok(Self { pool })
    }
}

#[async_trait(?Send)]
impl CensusBackend for PostgresBackend {
    fn dialect(&self) -> SqlDialect {
        SqlDialect::Postgres
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<QueryResult, CensusError> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = bind_postgres(query, param);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|err| backend_error(err.to_string()))?;
        let columns = match rows.first() {
            Some(row) => column_names(row.columns()),
            None => {
                let described = (&self.pool)
                    .describe(sql)
                    .await
                    .map_err(|err| backend_error(err.to_string()))?;
                column_names(described.columns())
            }
        };

        let mut out_rows = Vec::with_capacity(rows.len());
        for row in rows {
            let mut out = Vec::with_capacity(row.columns().len());
            for idx in 0..row.columns().len() {
                out.push(map_postgres_value(&row, idx)?);
            }
            out_rows.push(out);
        }
        Ok(QueryResult {
            rows: out_rows,
            columns,
        })
    }
}

fn column_names(columns: &[PgColumn]) -> Vec<String> {
    columns
        .iter()
        .map(|column| column.name().to_string())
        .collect()
}

fn bind_postgres<'q>(
    query: Query<'q, Postgres, PgArguments>,
    param: &'q Value,
) -> Query<'q, Postgres, PgArguments> {
    match param {
        Value::Null => query.bind(Option::<String>::None),
        Value::Integer(v) => query.bind(*v),
        Value::Real(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.as_str()),
        Value::Blob(v) => query.bind(v.as_slice()),
    }
}

fn map_postgres_value(row: &PgRow, index: usize) -> Result<Value, CensusError> {
    let raw = row
        .try_get_raw(index)
        .map_err(|err| backend_error(err.to_string()))?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = row.columns()[index].type_info().name().to_string();
    let decode_error = |err: sqlx::Error| backend_error(err.to_string());

    let value = match type_name.as_str() {
        "INT2" => Value::Integer(row.try_get::<i16, _>(index).map_err(decode_error)?.into()),
        "INT4" => Value::Integer(row.try_get::<i32, _>(index).map_err(decode_error)?.into()),
        "INT8" => Value::Integer(row.try_get::<i64, _>(index).map_err(decode_error)?),
        "FLOAT4" => Value::Real(row.try_get::<f32, _>(index).map_err(decode_error)?.into()),
        "FLOAT8" => Value::Real(row.try_get::<f64, _>(index).map_err(decode_error)?),
        "BOOL" => Value::Integer(row.try_get::<bool, _>(index).map_err(decode_error)?.into()),
        "BYTEA" => Value::Blob(row.try_get::<Vec<u8>, _>(index).map_err(decode_error)?),
        _ => match row.try_get::<String, _>(index) {
            Ok(text) => Value::Text(text),
            Err(_) => {
                return Err(backend_error(format!(
                    "column `{}` has unsupported postgres type {type_name}",
                    row.columns()[index].name()
                )))
            }
        },
    };
    Ok(value)
}
