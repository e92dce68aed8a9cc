use crate::errors;
use crate::storage::Row;
use crate::tables::{geoheader, keys};
use crate::{CensusError, Geoid, Value, Vintage};

/// A row locator in the form the store keeps it.
///
/// Census extracts usually hold `logrecno` as zero-padded text such as
/// `0000001`; lookups bind this form so they compare like with like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredLocator {
    Integer(i64),
    Text(String),
}

impl StoredLocator {
    fn to_value(&self) -> Value {
        match self {
            Self::Integer(value) => Value::Integer(*value),
            Self::Text(text) => Value::Text(text.clone()),
        }
    }
}

/// `(stusab, logrecno)`: unique only within one vintage.
///
/// Keys compare on `stusab` and the numeric locator, so `0000001` and `1`
/// name the same row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RowKey {
    pub stusab: String,
    pub logrecno: i64,
    #[serde(skip)]
    stored: StoredLocator,
}

impl RowKey {
    pub fn new(stusab: impl Into<String>, logrecno: i64) -> Self {
        Self {
            stusab: stusab.into(),
            logrecno,
            stored: StoredLocator::Integer(logrecno),
        }
    }

    /// Builds a key from caller input; the row locator must be numeric and is
    /// kept as text.
    pub fn parse(stusab: &str, logrecno: &str) -> Result<Self, CensusError> {
        let stusab = stusab.trim();
        if stusab.is_empty() {
            return Err(errors::invalid_argument_error("stusab must not be empty."));
        }
        Self::from_text(stusab, logrecno.trim())
    }

    fn from_text(stusab: &str, logrecno: &str) -> Result<Self, CensusError> {
        let number = logrecno.trim().parse::<i64>().map_err(|_| {
            errors::invalid_argument_error(&format!("logrecno `{logrecno}` is not numeric."))
        })?;
        Ok(Self {
            stusab: stusab.to_string(),
            logrecno: number,
            stored: StoredLocator::Text(logrecno.to_string()),
        })
    }

    pub fn stored(&self) -> &StoredLocator {
        &self.stored
    }

    /// The locator as it should be bound against the store.
    pub(crate) fn locator_value(&self) -> Value {
        self.stored.to_value()
    }

    pub(crate) fn from_row(row: &Row) -> Result<Self, CensusError> {
        let stusab = row.text(keys::STUSAB)?.ok_or_else(|| {
            errors::invalid_argument_error("stored row has a null stusab.")
        })?;
        match row.require(keys::LOGRECNO)? {
            Value::Integer(value) => Ok(Self::new(stusab, *value)),
            Value::Text(text) => Self::from_text(&stusab, text),
            Value::Real(value) if value.fract() == 0.0 && value.is_finite() => {
                Ok(Self::new(stusab, *value as i64))
            }
            _ => Err(errors::invalid_argument_error(&format!(
                "stored logrecno for stusab `{stusab}` is not numeric."
            ))),
        }
    }
}

impl PartialEq for RowKey {
    fn eq(&self, other: &Self) -> bool {
        self.stusab == other.stusab && self.logrecno == other.logrecno
    }
}

impl Eq for RowKey {}

impl std::hash::Hash for RowKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.stusab.hash(state);
        self.logrecno.hash(state);
    }
}

impl PartialOrd for RowKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RowKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (&self.stusab, self.logrecno).cmp(&(&other.stusab, other.logrecno))
    }
}

/// A geoid together with its row key inside one vintage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LocatedGeography {
    pub geoid: Geoid,
    #[serde(flatten)]
    pub key: RowKey,
}

impl LocatedGeography {
    pub(crate) fn from_row(row: &Row) -> Result<Self, CensusError> {
        let geoid = row.text(geoheader::GEOID)?.ok_or_else(|| {
            errors::invalid_argument_error("stored geography has a null geoid.")
        })?;
        Ok(Self {
            geoid: Geoid::parse(&geoid)?,
            key: RowKey::from_row(row)?,
        })
    }
}

/// The outcome of vintage resolution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedGeography {
    #[serde(rename = "acs")]
    pub vintage: Vintage,
    pub geoid: Geoid,
    #[serde(flatten)]
    pub key: RowKey,
}

#[cfg(test)]
mod tests {
    use super::{RowKey, StoredLocator};
    use crate::storage::Row;
    use crate::{ErrorCode, QueryResult, Value};

    fn header_row(logrecno: Value) -> Row {
        Row::from_result(
            "geoheader",
            QueryResult {
                columns: vec!["stusab".to_string(), "logrecno".to_string()],
                rows: vec![vec![Value::Text("CA".to_string()), logrecno]],
            },
        )
        .remove(0)
    }

    #[test]
    fn parse_requires_numeric_locator() {
        assert_eq!(RowKey::parse("CA", "0000013").unwrap(), RowKey::new("CA", 13));
        assert!(RowKey::parse("CA", "13a")
            .unwrap_err()
            .is(ErrorCode::InvalidArgument));
        assert!(RowKey::parse("", "1").is_err());
    }

    #[test]
    fn stored_text_locator_is_kept_verbatim() {
        let key = RowKey::from_row(&header_row(Value::Text("0000013".to_string()))).unwrap();

        assert_eq!(key.logrecno, 13);
        assert_eq!(key.stored(), &StoredLocator::Text("0000013".to_string()));
        assert_eq!(key.locator_value(), Value::Text("0000013".to_string()));
        assert_eq!(key, RowKey::new("CA", 13));
    }

    #[test]
    fn stored_integer_locator_binds_as_integer() {
        let key = RowKey::from_row(&header_row(Value::Integer(13))).unwrap();
        assert_eq!(key.locator_value(), Value::Integer(13));

        let err = RowKey::from_row(&header_row(Value::Text("x1".to_string()))).unwrap_err();
        assert!(err.is(ErrorCode::InvalidArgument));
    }
}
