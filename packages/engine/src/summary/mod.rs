mod document;

pub use document::{
    GeographySection, Metric, MetricNumber, MetricValues, Section, SummaryDocument, Topic,
    SECTION_NAMES,
};

use crate::aggregate::{checked_percent, combine};
use crate::errors;
use crate::storage::{Filter, Row, SelectQuery, TableName, VintageScope};
use crate::tables::{b01001, geoheader, keys};
use crate::{CensusBackend, CensusError, RowKey, Vintage};

const PERCENT_UNDER_18: &str = "percent_under_18";

/// Builds the summary document for one row key of one vintage.
pub async fn assemble(
    backend: &dyn CensusBackend,
    vintage: &Vintage,
    key: &RowKey,
) -> Result<SummaryDocument, CensusError> {
    let scope = VintageScope::new(backend, vintage);

    let header = fetch_keyed_row(&scope, geoheader::TABLE, key).await?;
    let mut doc = SummaryDocument::new(geography_section(vintage, key, &header)?);

    let population = fetch_keyed_row(&scope, b01001::TABLE, key).await?;
    doc.demographics
        .insert("population".to_string(), population_topic(&population)?);

    Ok(doc)
}

async fn fetch_keyed_row(
    scope: &VintageScope<'_>,
    table: &'static str,
    key: &RowKey,
) -> Result<Row, CensusError> {
    let query = SelectQuery::new(TableName::from_static(table), key_filter(key));
    scope
        .select_one(&query)
        .await?
        .ok_or_else(|| errors::row_not_found_error(table, &key.stusab, key.logrecno))
}

pub(crate) fn key_filter(key: &RowKey) -> Filter {
    Filter::All(vec![
        Filter::eq(keys::STUSAB, key.stusab.as_str()),
        Filter::eq(keys::LOGRECNO, key.locator_value()),
    ])
}

fn geography_section(
    vintage: &Vintage,
    key: &RowKey,
    header: &Row,
) -> Result<GeographySection, CensusError> {
    Ok(GeographySection {
        release: vintage.clone(),
        name: header.text(geoheader::NAME)?,
        pretty_name: None,
        stusab: header
            .text(keys::STUSAB)?
            .unwrap_or_else(|| key.stusab.clone()),
        sumlevel: header.text(geoheader::SUMLEVEL)?,
        land_area: None,
    })
}

fn population_topic(row: &Row) -> Result<Topic, CensusError> {
    let total = row.integer(b01001::TOTAL)?;
    let male = sum_columns(row, &b01001::MALE_UNDER_18)?;
    let female = sum_columns(row, &b01001::FEMALE_UNDER_18)?;
    let under_18 = combine([male, female]);

    let percent = checked_percent(PERCENT_UNDER_18, under_18, total, 1)?;

    let mut topic = Topic::new();
    topic.insert(
        "total".to_string(),
        Metric::new(b01001::TABLE, total.map(MetricNumber::Integer)),
    );
    topic.insert(
        PERCENT_UNDER_18.to_string(),
        Metric::new(b01001::TABLE, percent.map(MetricNumber::Decimal)),
    );
    Ok(topic)
}

fn sum_columns(row: &Row, columns: &[&str]) -> Result<Option<i64>, CensusError> {
    let values = columns
        .iter()
        .map(|column| row.integer(column))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(combine(values))
}
