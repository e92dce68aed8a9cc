use std::sync::Arc;

use crate::errors;
use crate::{CensusError, QueryResult, Value};

/// One result row with its column names, in select order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    table: Arc<str>,
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn from_result(table: &str, result: QueryResult) -> Vec<Row> {
        let table: Arc<str> = Arc::from(table);
        let columns: Arc<[String]> = result.columns.into();
        result
            .rows
            .into_iter()
            .map(|values| Row {
                table: Arc::clone(&table),
                columns: Arc::clone(&columns),
                values,
            })
            .collect()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|name| name.eq_ignore_ascii_case(column))
            .and_then(|idx| self.values.get(idx))
    }

    pub fn require(&self, column: &str) -> Result<&Value, CensusError> {
        self.get(column)
            .ok_or_else(|| errors::missing_column_error(&self.table, column))
    }

    pub fn text(&self, column: &str) -> Result<Option<String>, CensusError> {
        match self.require(column)? {
            Value::Null => Ok(None),
            Value::Text(value) => Ok(Some(value.clone())),
            Value::Integer(value) => Ok(Some(value.to_string())),
            other => Err(errors::invalid_value_error(column, "text", other)),
        }
    }

    pub fn integer(&self, column: &str) -> Result<Option<i64>, CensusError> {
        self.require(column)?.to_integer(column)
    }

    pub fn into_pairs(self) -> impl Iterator<Item = (String, Value)> {
        let columns = self.columns;
        self.values
            .into_iter()
            .enumerate()
            .map(move |(idx, value)| (columns[idx].clone(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::Row;
    use crate::{ErrorCode, QueryResult, Value};

    fn rows() -> Vec<Row> {
        Row::from_result(
            "geoheader",
            QueryResult {
                columns: vec!["GEOID".to_string(), "logrecno".to_string()],
                rows: vec![vec![Value::Text("04000US06".to_string()), Value::Integer(13)]],
            },
        )
    }

    #[test]
    fn column_lookup_ignores_ascii_case() {
        let row = &rows()[0];
        assert_eq!(row.text("geoid").unwrap().as_deref(), Some("04000US06"));
        assert_eq!(row.integer("LOGRECNO").unwrap(), Some(13));
    }

    #[test]
    fn missing_columns_are_reported_with_table() {
        let err = rows()[0].require("stusab").unwrap_err();
        assert!(err.is(ErrorCode::InvalidValue));
        assert!(err.description.contains("geoheader"));
    }

    #[test]
    fn into_pairs_keeps_select_order() {
        let pairs = rows().remove(0).into_pairs().collect::<Vec<_>>();
        assert_eq!(pairs[0].0, "GEOID");
        assert_eq!(pairs[1], ("logrecno".to_string(), Value::Integer(13)));
    }
}
