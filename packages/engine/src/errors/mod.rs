use crate::{CensusError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidArgument,
    TooManyParents,
    UnknownVintage,
    UnsupportedLevel,
    NotFound,
    AmbiguousMatch,
    UnmappedRow,
    DivisionError,
    InvalidValue,
    Backend,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "CENSUS_ERROR_INVALID_ARGUMENT",
            Self::TooManyParents => "CENSUS_ERROR_TOO_MANY_PARENTS",
            Self::UnknownVintage => "CENSUS_ERROR_UNKNOWN_VINTAGE",
            Self::UnsupportedLevel => "CENSUS_ERROR_UNSUPPORTED_LEVEL",
            Self::NotFound => "CENSUS_ERROR_NOT_FOUND",
            Self::AmbiguousMatch => "CENSUS_ERROR_AMBIGUOUS_MATCH",
            Self::UnmappedRow => "CENSUS_ERROR_UNMAPPED_ROW",
            Self::DivisionError => "CENSUS_ERROR_DIVISION",
            Self::InvalidValue => "CENSUS_ERROR_INVALID_VALUE",
            Self::Backend => "CENSUS_ERROR_BACKEND",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::InvalidArgument,
            Self::TooManyParents,
            Self::UnknownVintage,
            Self::UnsupportedLevel,
            Self::NotFound,
            Self::AmbiguousMatch,
            Self::UnmappedRow,
            Self::DivisionError,
            Self::InvalidValue,
            Self::Backend,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|entry| entry.as_str() == code)
    }

    /// Errors caused by the caller's input rather than by stored data.
    pub const fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::InvalidArgument
                | Self::TooManyParents
                | Self::UnknownVintage
                | Self::UnsupportedLevel
        )
    }
}

fn build_error(code: ErrorCode, title: &str, description: &str) -> CensusError {
    CensusError::new(code.as_str(), title, description)
}

pub(crate) fn invalid_argument_error(description: &str) -> CensusError {
    build_error(ErrorCode::InvalidArgument, "Invalid argument", description)
}

pub(crate) fn too_many_parents_error(count: usize) -> CensusError {
    build_error(
        ErrorCode::TooManyParents,
        "Too many parent geographies",
        &format!("Child expansion supports exactly one parent geoid, got {count}."),
    )
}

pub(crate) fn unknown_vintage_error(vintage: &str) -> CensusError {
    build_error(
        ErrorCode::UnknownVintage,
        "Unknown vintage",
        &format!("`{vintage}` is not a cataloged vintage."),
    )
}

pub(crate) fn unsupported_level_error(level: &str) -> CensusError {
    build_error(
        ErrorCode::UnsupportedLevel,
        "Unsupported child summary level",
        &format!("Child summary level `{level}` is not supported. Use 50 or 60."),
    )
}

pub(crate) fn geoid_not_found_error(geoid: &str, vintage: Option<&str>) -> CensusError {
    let description = match vintage {
        Some(vintage) => format!("`{geoid}` does not exist in vintage `{vintage}`."),
        None => format!("`{geoid}` does not exist in any cataloged vintage."),
    };
    build_error(ErrorCode::NotFound, "Geography not found", &description)
}

pub(crate) fn row_not_found_error(table: &str, stusab: &str, logrecno: i64) -> CensusError {
    build_error(
        ErrorCode::NotFound,
        "Row not found",
        &format!("`{table}` has no row for stusab `{stusab}` and logrecno {logrecno}."),
    )
}

pub(crate) fn ambiguous_match_error(geoid: &str, vintage: &str, rows: usize) -> CensusError {
    build_error(
        ErrorCode::AmbiguousMatch,
        "Ambiguous geography",
        &format!("`{geoid}` matched at least {rows} rows in vintage `{vintage}`."),
    )
}

pub(crate) fn unmapped_row_error(table: &str, stusab: &str, logrecno: i64) -> CensusError {
    build_error(
        ErrorCode::UnmappedRow,
        "Unmapped row",
        &format!(
            "`{table}` returned a row for stusab `{stusab}` and logrecno {logrecno} with no known geoid."
        ),
    )
}

pub(crate) fn division_error(metric: &str) -> CensusError {
    build_error(
        ErrorCode::DivisionError,
        "Division by null or zero",
        &format!("`{metric}` cannot be derived because its denominator is null or zero."),
    )
}

pub(crate) fn invalid_value_error(column: &str, expected: &str, value: &Value) -> CensusError {
    build_error(
        ErrorCode::InvalidValue,
        "Invalid stored value",
        &format!(
            "Column `{column}` holds a {} value where {expected} was expected.",
            value.type_name()
        ),
    )
}

pub(crate) fn missing_column_error(table: &str, column: &str) -> CensusError {
    build_error(
        ErrorCode::InvalidValue,
        "Missing column",
        &format!("`{table}` did not return the expected column `{column}`."),
    )
}

pub fn backend_error(description: impl Into<String>) -> CensusError {
    build_error(ErrorCode::Backend, "Storage backend error", &description.into())
}
