use crate::errors;
use crate::CensusError;

/// Literal that follows the 3-digit summary level in every geoid.
const COMPONENT_MARKER: &str = "00US";
/// Character offset where the parent-linkage suffix starts (`SSS00US`).
const PARENT_SUFFIX_OFFSET: usize = 7;

/// External geography identifier such as `04000US06` or `05000US06075`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct Geoid(String);

impl Geoid {
    pub fn parse(value: &str) -> Result<Self, CensusError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(errors::invalid_argument_error("a geoid must not be empty."));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parses a comma separated list, skipping blank entries.
    pub fn parse_list(value: &str) -> Result<Vec<Self>, CensusError> {
        value
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 3-digit summary level prefix, if the geoid carries one.
    pub fn summary_level(&self) -> Option<&str> {
        let level = self.0.get(..3)?;
        level.bytes().all(|b| b.is_ascii_digit()).then_some(level)
    }

    /// Everything after the `SSS00US` header; empty for shorter geoids.
    pub fn parent_suffix(&self) -> &str {
        match self.0.char_indices().nth(PARENT_SUFFIX_OFFSET) {
            Some((offset, _)) => &self.0[offset..],
            None => "",
        }
    }
}

impl std::fmt::Display for Geoid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Child summary levels reachable by prefix expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildLevel {
    /// State to county.
    County,
    /// County to county subdivision.
    CountySubdivision,
}

impl ChildLevel {
    pub const fn code(self) -> u16 {
        match self {
            Self::County => 50,
            Self::CountySubdivision => 60,
        }
    }

    pub fn from_code(code: u16) -> Result<Self, CensusError> {
        match code {
            50 => Ok(Self::County),
            60 => Ok(Self::CountySubdivision),
            other => Err(errors::unsupported_level_error(&other.to_string())),
        }
    }

    /// Accepts exactly `50` or `60`.
    pub fn parse(value: &str) -> Result<Self, CensusError> {
        match value {
            "50" => Ok(Self::County),
            "60" => Ok(Self::CountySubdivision),
            other => Err(errors::unsupported_level_error(other)),
        }
    }

    /// Geoid prefix shared by every child of `parent` at this level.
    pub fn child_prefix(self, parent: &Geoid) -> String {
        format!(
            "{:03}{COMPONENT_MARKER}{}",
            self.code(),
            parent.parent_suffix()
        )
    }
}
