use crate::error_classification::is_missing_relation_error;
use crate::errors;
use crate::storage::{Filter, SelectQuery, TableName, VintageScope};
use crate::tables::{geoheader, keys};
use crate::{
    CensusBackend, CensusError, Geoid, ResolvedGeography, RowKey, Vintage, VintageCatalog,
};

enum Probe {
    Found(RowKey),
    Missing,
    Ambiguous(usize),
}

/// Finds the best-ranked vintage in which `geoid` names exactly one row.
///
/// With a `hint` only that vintage is searched. A vintage where the geoid
/// matches more than one header row does not count as a match.
pub async fn resolve(
    backend: &dyn CensusBackend,
    catalog: &VintageCatalog,
    geoid: &Geoid,
    hint: Option<&str>,
) -> Result<ResolvedGeography, CensusError> {
    for vintage in catalog.candidates(hint)? {
        match lookup_header(backend, vintage, geoid).await? {
            Probe::Found(key) => {
                tracing::debug!(%geoid, %vintage, stusab = %key.stusab, logrecno = key.logrecno, "resolved geoid");
                return Ok(ResolvedGeography {
                    vintage: vintage.clone(),
                    geoid: geoid.clone(),
                    key,
                });
            }
            Probe::Missing => {
                tracing::debug!(%geoid, %vintage, "geoid not in vintage");
            }
            Probe::Ambiguous(rows) => {
                let signal = errors::ambiguous_match_error(geoid.as_str(), vintage.id(), rows);
                tracing::warn!(code = %signal.code, "{}", signal.description);
            }
        }
    }
    Err(errors::geoid_not_found_error(geoid.as_str(), hint))
}

async fn lookup_header(
    backend: &dyn CensusBackend,
    vintage: &Vintage,
    geoid: &Geoid,
) -> Result<Probe, CensusError> {
    let query = SelectQuery::new(
        TableName::from_static(geoheader::TABLE),
        Filter::eq(geoheader::GEOID, geoid.as_str()),
    )
    .columns(&[keys::STUSAB, keys::LOGRECNO])
    .limit(2);

    let rows = match VintageScope::new(backend, vintage).select_many(&query).await {
        Ok(rows) => rows,
        Err(err) if is_missing_relation_error(&err) => {
            tracing::debug!(%vintage, "vintage is not loaded");
            return Ok(Probe::Missing);
        }
        Err(err) => return Err(err),
    };

    match rows.as_slice() {
        [] => Ok(Probe::Missing),
        [row] => Ok(Probe::Found(RowKey::from_row(row)?)),
        many => Ok(Probe::Ambiguous(many.len())),
    }
}
