use crate::app::AppContext;
use crate::cli::root::OutputFormat;
use crate::cli::table::TableArgs;
use crate::db;
use crate::error::CliError;
use crate::output;
use census_rs_sdk::{ChildLevel, Geoid};

pub async fn run(context: &AppContext, args: TableArgs) -> Result<(), CliError> {
    let geoids = Geoid::parse_list(&args.geoids)?;
    if geoids.is_empty() {
        return Err(CliError::InvalidArgs("--geoids needs at least one geoid"));
    }
    let child_level = args
        .sumlevel
        .as_deref()
        .map(ChildLevel::parse)
        .transpose()?;

    let census = db::open(context).await?;
    let projection = census
        .table_details(&args.vintage, &args.table, &geoids, child_level)
        .await?;

    match args.format {
        OutputFormat::Json => output::print_json(&projection)?,
        OutputFormat::Table => output::print_projection_table(&projection),
    }
    Ok(())
}
