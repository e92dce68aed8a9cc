use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::errors;
use crate::hierarchy::expand_children;
use crate::storage::{Filter, SelectQuery, TableName, VintageScope};
use crate::summary::key_filter;
use crate::tables::{geoheader, keys};
use crate::{
    CensusBackend, CensusError, ChildLevel, Geoid, LocatedGeography, RowKey, Value, Vintage,
    VintageCatalog,
};

/// Geoid to its table columns, both ordered lexicographically.
pub type TableProjection = BTreeMap<Geoid, BTreeMap<String, Value>>;

/// Looks up the row keys of `geoids` in one vintage's header table.
///
/// Geoids missing from the vintage are left out of the result.
pub async fn locate(
    backend: &dyn CensusBackend,
    catalog: &VintageCatalog,
    vintage: &str,
    geoids: &[Geoid],
) -> Result<Vec<LocatedGeography>, CensusError> {
    let vintage = catalog.get(vintage)?;
    if geoids.is_empty() {
        return Ok(Vec::new());
    }
    let values = geoids
        .iter()
        .map(|geoid| Value::from(geoid.as_str()))
        .collect::<Vec<_>>();
    let query = SelectQuery::new(
        TableName::from_static(geoheader::TABLE),
        Filter::is_in(geoheader::GEOID, values),
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

/// Reads `table` for the given geographies and keys the rows by geoid.
///
/// Rows are matched on the `(stusab, logrecno)` pair; the join keys are
/// dropped from the output. When the table holds more than one row for a
/// pair, the first row is kept.
pub async fn query_table(
    backend: &dyn CensusBackend,
    vintage: &Vintage,
    table: &TableName,
    locators: &[LocatedGeography],
) -> Result<TableProjection, CensusError> {
    let mut projection = TableProjection::new();
    if locators.is_empty() {
        return Ok(projection);
    }

    let geoid_by_key = locators
        .iter()
        .map(|located| (located.key.clone(), located.geoid.clone()))
        .collect::<HashMap<_, _>>();
    let distinct_keys = locators
        .iter()
        .map(|located| &located.key)
        .collect::<BTreeSet<_>>();
    let filter = Filter::Any(distinct_keys.into_iter().map(key_filter).collect());

    let query = SelectQuery::new(table.clone(), filter);
    let rows = VintageScope::new(backend, vintage)
        .select_many(&query)
        .await?;

    for row in rows {
        let key = RowKey::from_row(&row)?;
        let geoid = geoid_by_key.get(&key).ok_or_else(|| {
            errors::unmapped_row_error(table.as_str(), &key.stusab, key.logrecno)
        })?;
        let columns = row
            .into_pairs()
            .filter(|(column, _)| !is_join_key(column))
            .collect::<BTreeMap<_, _>>();
        match projection.entry(geoid.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(columns);
            }
            Entry::Occupied(_) => {
                tracing::warn!(
                    table = %table,
                    %vintage,
                    %geoid,
                    stusab = %key.stusab,
                    logrecno = key.logrecno,
                    "table returned more than one row for a geography; keeping the first"
                );
            }
        }
    }
    Ok(projection)
}

/// Reads `table` for explicit geoids, or for the children of a single parent
/// when `child_level` is given.
pub async fn table_details(
    backend: &dyn CensusBackend,
    catalog: &VintageCatalog,
    vintage: &str,
    table: &str,
    geoids: &[Geoid],
    child_level: Option<ChildLevel>,
) -> Result<TableProjection, CensusError> {
    let resolved_vintage = catalog.get(vintage)?;
    let table = TableName::parse(table)?;
    if geoids.is_empty() {
        return Err(errors::invalid_argument_error(
            "include at least one geoid.",
        ));
    }

    let locators = match child_level {
        Some(level) => expand_children(backend, catalog, vintage, geoids, level).await?,
        None => locate(backend, catalog, vintage, geoids).await?,
    };
    tracing::debug!(%table, vintage = %resolved_vintage, geographies = locators.len(), "projecting table");
    query_table(backend, resolved_vintage, &table, &locators).await
}

fn is_join_key(column: &str) -> bool {
    column.eq_ignore_ascii_case(keys::STUSAB) || column.eq_ignore_ascii_case(keys::LOGRECNO)
}
