use census_rs_sdk::{CensusError, ErrorCode};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CliError {
    InvalidArgs(&'static str),
    Message(String),
    NotFound(String),
    Census(CensusError),
    Io {
        context: &'static str,
        source: std::io::Error,
    },
}

impl CliError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Maps a failed geoid lookup to the message matching how it was scoped.
    pub fn from_lookup(err: CensusError, vintage: Option<&str>) -> Self {
        if !err.is(ErrorCode::NotFound) {
            return Self::Census(err);
        }
        let message = match vintage {
            Some(_) => "that ACS doesn't know about that geoid",
            None => "none of the ACS I know about have that geoid",
        };
        Self::NotFound(message.to_string())
    }

    /// 2 for bad input, 3 for a geography that does not exist, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgs(_) => 2,
            Self::NotFound(_) => 3,
            Self::Census(err) => match err.error_code() {
                Some(code) if code.is_client_error() => 2,
                Some(ErrorCode::NotFound) => 3,
                _ => 1,
            },
            Self::Message(_) | Self::Io { .. } => 1,
        }
    }
}

impl From<CensusError> for CliError {
    fn from(err: CensusError) -> Self {
        Self::Census(err)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgs(message) => write!(f, "invalid arguments: {message}"),
            Self::Message(message) | Self::NotFound(message) => write!(f, "{message}"),
            Self::Census(err) => write!(f, "{err}"),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for CliError {}
