use crate::errors;
use crate::storage::is_plain_identifier;
use crate::CensusError;

/// Built-in ACS ranking: newest release first, narrowest sampling window first.
const ACS_DEFAULT_RANKING: &[&str] = &[
    "acs2011_1yr",
    "acs2011_3yr",
    "acs2011_5yr",
    "acs2010_1yr",
    "acs2010_3yr",
    "acs2010_5yr",
    "acs2009_1yr",
    "acs2009_3yr",
    "acs2008_1yr",
    "acs2008_3yr",
    "acs2007_1yr",
    "acs2007_3yr",
];

/// One dataset release. The id is also the storage namespace name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Vintage {
    id: String,
}

impl Vintage {
    fn parse(id: &str) -> Result<Self, CensusError> {
        if !is_plain_identifier(id) {
            return Err(errors::invalid_argument_error(&format!(
                "`{id}` is not a valid vintage identifier."
            )));
        }
        Ok(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Release year for ids shaped like `acs2011_1yr`.
    pub fn release_year(&self) -> Option<u16> {
        self.acs_parts().map(|(year, _)| year)
    }

    /// Sampling window in years for ids shaped like `acs2011_1yr`.
    pub fn window_years(&self) -> Option<u8> {
        self.acs_parts().map(|(_, window)| window)
    }

    fn acs_parts(&self) -> Option<(u16, u8)> {
        let rest = self.id.strip_prefix("acs")?;
        let (year, window) = rest.split_once('_')?;
        let window = window.strip_suffix("yr")?;
        if year.len() != 4 {
            return None;
        }
        Some((year.parse().ok()?, window.parse().ok()?))
    }
}

impl std::fmt::Display for Vintage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// Ordered vintages, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VintageCatalog {
    vintages: Vec<Vintage>,
}

impl VintageCatalog {
    pub fn acs_default() -> Self {
        Self {
            vintages: ACS_DEFAULT_RANKING
                .iter()
                .map(|id| Vintage { id: id.to_string() })
                .collect(),
        }
    }

    pub fn from_ids<I, S>(ids: I) -> Result<Self, CensusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vintages: Vec<Vintage> = Vec::new();
        for id in ids {
            let vintage = Vintage::parse(id.as_ref().trim())?;
            if vintages.contains(&vintage) {
                return Err(errors::invalid_argument_error(&format!(
                    "vintage `{vintage}` is listed more than once."
                )));
            }
            vintages.push(vintage);
        }
        if vintages.is_empty() {
            return Err(errors::invalid_argument_error(
                "a vintage catalog needs at least one vintage.",
            ));
        }
        Ok(Self { vintages })
    }

    pub fn get(&self, id: &str) -> Result<&Vintage, CensusError> {
        self.vintages
            .iter()
            .find(|vintage| vintage.id == id)
            .ok_or_else(|| errors::unknown_vintage_error(id))
    }

    pub fn rank(&self, id: &str) -> Option<usize> {
        self.vintages.iter().position(|vintage| vintage.id == id)
    }

    /// Vintages to try for a lookup: only the hint when one is given.
    pub fn candidates(&self, hint: Option<&str>) -> Result<Vec<&Vintage>, CensusError> {
        match hint {
            Some(id) => Ok(vec![self.get(id)?]),
            None => Ok(self.vintages.iter().collect()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vintage> {
        self.vintages.iter()
    }

    pub fn len(&self) -> usize {
        self.vintages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vintages.is_empty()
    }
}

impl Default for VintageCatalog {
    fn default() -> Self {
        Self::acs_default()
    }
}

#[cfg(test)]
mod tests {
    use super::VintageCatalog;
    use crate::ErrorCode;

    #[test]
    fn default_ranking_prefers_newest_then_narrowest() {
        let catalog = VintageCatalog::acs_default();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.rank("acs2011_1yr"), Some(0));
        assert!(catalog.rank("acs2011_5yr") < catalog.rank("acs2010_1yr"));
        assert_eq!(catalog.iter().last().unwrap().id(), "acs2007_3yr");
    }

    #[test]
    fn candidates_narrow_to_hint() {
        let catalog = VintageCatalog::acs_default();
        let only = catalog.candidates(Some("acs2009_3yr")).unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].id(), "acs2009_3yr");
        assert_eq!(catalog.candidates(None).unwrap().len(), 12);
    }

    #[test]
    fn unknown_hint_is_rejected() {
        let err = VintageCatalog::acs_default()
            .candidates(Some("acs2011_1yr; DROP SCHEMA public"))
            .unwrap_err();
        assert!(err.is(ErrorCode::UnknownVintage));
    }

    #[test]
    fn injected_catalogs_are_validated() {
        assert!(VintageCatalog::from_ids(["a", "b"]).is_ok());
        assert!(VintageCatalog::from_ids(Vec::<String>::new())
            .unwrap_err()
            .is(ErrorCode::InvalidArgument));
        assert!(VintageCatalog::from_ids(["a", "a"]).is_err());
        assert!(VintageCatalog::from_ids(["a.b"]).is_err());
    }

    #[test]
    fn acs_ids_expose_year_and_window() {
        let catalog = VintageCatalog::acs_default();
        let vintage = catalog.get("acs2010_3yr").unwrap();
        assert_eq!(vintage.release_year(), Some(2010));
        assert_eq!(vintage.window_years(), Some(3));

        let custom = VintageCatalog::from_ids(["fixture"]).unwrap();
        assert_eq!(custom.get("fixture").unwrap().release_year(), None);
    }
}
