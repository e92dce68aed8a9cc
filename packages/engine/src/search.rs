use crate::error_classification::is_missing_relation_error;
use crate::errors;
use crate::storage::{Filter, Row, SelectQuery, TableName, VintageScope};
use crate::tables::{geoheader, keys};
use crate::{CensusBackend, CensusError, Geoid, LocatedGeography, Vintage, VintageCatalog};

pub const SEARCH_RESULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GeographyMatch {
    pub geoid: Geoid,
    #[serde(rename = "state")]
    pub stusab: String,
    pub name: String,
    #[serde(rename = "acs")]
    pub vintage: Vintage,
}

/// Prefix search over geography names.
///
/// With a vintage, only that vintage is searched. Without one, vintages are
/// scanned in rank order and the first non-empty match set wins.
pub async fn search(
    backend: &dyn CensusBackend,
    catalog: &VintageCatalog,
    term: &str,
    vintage: Option<&str>,
) -> Result<Vec<GeographyMatch>, CensusError> {
    if term.is_empty() {
        return Err(errors::invalid_argument_error(
            "provide a name to search for.",
        ));
    }

    for vintage in catalog.candidates(vintage)? {
        let matches = search_vintage(backend, vintage, term).await?;
        if !matches.is_empty() {
            return Ok(matches);
        }
        tracing::debug!(%vintage, term, "no name matches in vintage");
    }
    Ok(Vec::new())
}

async fn search_vintage(
    backend: &dyn CensusBackend,
    vintage: &Vintage,
    term: &str,
) -> Result<Vec<GeographyMatch>, CensusError> {
    let query = SelectQuery::new(
        TableName::from_static(geoheader::TABLE),
        Filter::starts_with(geoheader::NAME, term),
    )
    .columns(&[geoheader::GEOID, keys::STUSAB, keys::LOGRECNO, geoheader::NAME])
    .order_by(&[geoheader::NAME, geoheader::GEOID])
    .limit(SEARCH_RESULT_LIMIT);

    let rows = match VintageScope::new(backend, vintage).select_many(&query).await {
        Ok(rows) => rows,
        Err(err) if is_missing_relation_error(&err) => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };
    rows.iter().map(|row| to_match(row, vintage)).collect()
}

fn to_match(row: &Row, vintage: &Vintage) -> Result<GeographyMatch, CensusError> {
    let located = LocatedGeography::from_row(row)?;
    Ok(GeographyMatch {
        geoid: located.geoid,
        stusab: located.key.stusab,
        name: row.text(geoheader::NAME)?.unwrap_or_default(),
        vintage: vintage.clone(),
    })
}
