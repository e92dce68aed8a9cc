use crate::error::CliError;
use census_rs_sdk::{GeographyMatch, TableProjection, Value, VintageCatalog};
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, ContentArrangement, Row, Table};
use serde::Serialize;
use std::collections::BTreeSet;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::msg(format!("failed to encode JSON output: {err}")))?;
    println!("{rendered}");
    Ok(())
}

pub fn print_catalog_table(catalog: &VintageCatalog) {
    let mut table = new_table(["rank", "vintage", "release year", "window (years)"]);
    for (rank, vintage) in catalog.iter().enumerate() {
        table.add_row(Row::from(vec![
            Cell::new(rank + 1),
            Cell::new(vintage.id()),
            Cell::new(optional_text(vintage.release_year())),
            Cell::new(optional_text(vintage.window_years())),
        ]));
    }
    println!("{table}");
}

pub fn print_matches_table(matches: &[GeographyMatch]) {
    if matches.is_empty() {
        println!("(no matches)");
        return;
    }
    let mut table = new_table(["geoid", "state", "name", "acs"]);
    for found in matches {
        table.add_row(Row::from(vec![
            Cell::new(found.geoid.as_str()),
            Cell::new(&found.stusab),
            Cell::new(&found.name),
            Cell::new(found.vintage.id()),
        ]));
    }
    println!("{table}");
    println!("({} rows)", matches.len());
}

/// One row per geoid, one column per table column.
pub fn print_projection_table(projection: &TableProjection) {
    if projection.is_empty() {
        println!("(no rows)");
        return;
    }
    let columns = projection
        .values()
        .flat_map(|row| row.keys().cloned())
        .collect::<BTreeSet<_>>();

    let mut header = vec!["geoid".to_string()];
    header.extend(columns.iter().cloned());
    let mut table = new_table(header);
    for (geoid, row) in projection {
        let mut cells = vec![Cell::new(geoid.as_str())];
        cells.extend(
            columns
                .iter()
                .map(|column| Cell::new(row.get(column).map(value_to_text).unwrap_or_default())),
        );
        table.add_row(Row::from(cells));
    }
    println!("{table}");
    println!("({} rows)", projection.len());
}

fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Row::from(header.into_iter().map(Into::into).collect::<Vec<Cell>>()));
    table
}

fn optional_text<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => v.to_string(),
        Value::Text(v) => v.clone(),
        Value::Blob(bytes) => bytes_to_hex(bytes),
    }
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
