use crate::errors;
use crate::storage::{Filter, SelectQuery, TableName, VintageScope};
use crate::tables::{geoheader, keys};
use crate::{
    CensusBackend, CensusError, ChildLevel, Geoid, LocatedGeography, VintageCatalog,
};

/// Lists the geographies one level below `parents[0]` within `vintage`.
///
/// Children are found by geoid prefix: the zero-padded child level, `00US`,
/// then the parent's suffix after its own `SSS00US` header.
pub async fn expand_children(
    backend: &dyn CensusBackend,
    catalog: &VintageCatalog,
    vintage: &str,
    parents: &[Geoid],
    level: ChildLevel,
) -> Result<Vec<LocatedGeography>, CensusError> {
    let vintage = catalog.get(vintage)?;
    let parent = match parents {
        [] => {
            return Err(errors::invalid_argument_error(
                "include one parent geoid to expand.",
            ))
        }
        [parent] => parent,
        many => return Err(errors::too_many_parents_error(many.len())),
    };

    let prefix = level.child_prefix(parent);
    tracing::debug!(%parent, %vintage, level = level.code(), %prefix, "expanding children");

    let query = SelectQuery::new(
        TableName::from_static(geoheader::TABLE),
        Filter::starts_with(geoheader::GEOID, prefix),
    )
    .columns(&[geoheader::GEOID, keys::STUSAB, keys::LOGRECNO])
    .order_by(&[geoheader::GEOID]);

    VintageScope::new(backend, vintage)
        .select_many(&query)
        .await?
        .iter()
        .map(LocatedGeography::from_row)
        .collect()
}
