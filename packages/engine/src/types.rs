use crate::errors;
use crate::CensusError;

/// A raw value as returned by the storage collaborator.
///
/// Serializes untagged so projected rows render as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Coerces a stored value into an integer, accepting integral reals.
    ///
    /// `NULL` and blank text are absent. Zero is a present value.
    pub fn to_integer(&self, column: &str) -> Result<Option<i64>, CensusError> {
        match self {
            Value::Null => Ok(None),
            Value::Integer(value) => Ok(Some(*value)),
            Value::Real(value) if value.fract() == 0.0 && value.is_finite() => {
                Ok(Some(*value as i64))
            }
            Value::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| errors::invalid_value_error(column, "an integer", self))
            }
            _ => Err(errors::invalid_value_error(column, "an integer", self)),
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct QueryResult {
    pub rows: Vec<Vec<Value>>,
    pub columns: Vec<String>,
}
