#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusError {
    pub code: String,
    pub title: String,
    pub description: String,
}

impl CensusError {
    pub fn new(code: &str, title: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Returns the catalog entry for this error, if the code is a known one.
    pub fn error_code(&self) -> Option<crate::ErrorCode> {
        crate::ErrorCode::from_code(&self.code)
    }

    pub fn is(&self, code: crate::ErrorCode) -> bool {
        self.code == code.as_str()
    }
}

impl std::fmt::Display for CensusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

impl std::error::Error for CensusError {}
