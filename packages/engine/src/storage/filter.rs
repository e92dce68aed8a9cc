use super::ident::quote_ident;
use crate::{SqlDialect, Value};

/// A row predicate over known columns.
///
/// Column names are compile-time constants; every value is bound as a
/// parameter when the filter is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { column: &'static str, value: Value },
    StartsWith { column: &'static str, prefix: String },
    In { column: &'static str, values: Vec<Value> },
    All(Vec<Filter>),
    Any(Vec<Filter>),
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Eq {
            column,
            value: value.into(),
        }
    }

    pub fn starts_with(column: &'static str, prefix: impl Into<String>) -> Self {
        Self::StartsWith {
            column,
            prefix: prefix.into(),
        }
    }

    pub fn is_in(column: &'static str, values: Vec<Value>) -> Self {
        Self::In { column, values }
    }

    pub(crate) fn render(&self, dialect: SqlDialect, params: &mut Vec<Value>) -> String {
        match self {
            Self::Eq { column, value } => {
                params.push(value.clone());
                format!(
                    "{} = {}",
                    quote_ident(column),
                    dialect.placeholder(params.len())
                )
            }
            Self::StartsWith { column, prefix } => {
                params.push(Value::Text(format!("{}%", escape_like(prefix))));
                format!(
                    "{} LIKE {} ESCAPE '\\'",
                    quote_ident(column),
                    dialect.placeholder(params.len())
                )
            }
            Self::In { column, values } => {
                if values.is_empty() {
                    return "1 = 0".to_string();
                }
                let placeholders = values
                    .iter()
                    .map(|value| {
                        params.push(value.clone());
                        dialect.placeholder(params.len())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} IN ({placeholders})", quote_ident(column))
            }
            Self::All(filters) => join_filters(filters, " AND ", "1 = 1", dialect, params),
            Self::Any(filters) => join_filters(filters, " OR ", "1 = 0", dialect, params),
        }
    }
}

fn join_filters(
    filters: &[Filter],
    separator: &str,
    empty: &str,
    dialect: SqlDialect,
    params: &mut Vec<Value>,
) -> String {
    match filters {
        [] => empty.to_string(),
        [single] => single.render(dialect, params),
        many => many
            .iter()
            .map(|filter| format!("({})", filter.render(dialect, params)))
            .collect::<Vec<_>>()
            .join(separator),
    }
}

pub(crate) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
