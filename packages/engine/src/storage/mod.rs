mod filter;
mod ident;
mod row;

pub use filter::Filter;
pub use ident::TableName;
pub use row::Row;

pub(crate) use ident::is_plain_identifier;

use ident::quote_ident;

use crate::{CensusBackend, CensusError, Value, Vintage};

/// A single-table read: projection, filter, ordering and an optional cap.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: TableName,
    columns: Option<Vec<&'static str>>,
    filter: Filter,
    order_by: Vec<&'static str>,
    limit: Option<usize>,
}

impl SelectQuery {
    pub fn new(table: TableName, filter: Filter) -> Self {
        Self {
            table,
            columns: None,
            filter,
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns = Some(columns.to_vec());
        self
    }

    pub fn order_by(mut self, columns: &[&'static str]) -> Self {
        self.order_by = columns.to_vec();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn render(&self, namespace: &str, scope: &VintageScope<'_>) -> (String, Vec<Value>) {
        let dialect = scope.backend.dialect();
        let mut params = Vec::new();
        let projection = match &self.columns {
            Some(columns) => columns
                .iter()
                .map(|column| quote_ident(column))
                .collect::<Vec<_>>()
                .join(", "),
            None => "*".to_string(),
        };
        let mut sql = format!(
            "SELECT {projection} FROM {}.{} WHERE {}",
            quote_ident(namespace),
            quote_ident(self.table.as_str()),
            self.filter.render(dialect, &mut params),
        );
        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(|column| quote_ident(column))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(" ORDER BY {order}"));
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        (sql, params)
    }
}

/// Reads scoped to one cataloged vintage.
///
/// Every table reference is qualified with the vintage namespace, so a scope
/// plays the part of an active schema without any session state.
#[derive(Clone, Copy)]
pub struct VintageScope<'a> {
    backend: &'a dyn CensusBackend,
    vintage: &'a Vintage,
}

impl<'a> VintageScope<'a> {
    pub fn new(backend: &'a dyn CensusBackend, vintage: &'a Vintage) -> Self {
        Self { backend, vintage }
    }

    pub async fn select_many(&self, query: &SelectQuery) -> Result<Vec<Row>, CensusError> {
        let (sql, params) = query.render(self.vintage.id(), self);
        tracing::debug!(vintage = %self.vintage, table = %query.table, sql = %sql, "select");
        let result = self.backend.execute(&sql, &params).await?;
        Ok(Row::from_result(query.table.as_str(), result))
    }

    pub async fn select_one(&self, query: &SelectQuery) -> Result<Option<Row>, CensusError> {
        let query = query.clone().limit(1);
        Ok(self.select_many(&query).await?.into_iter().next())
    }
}
