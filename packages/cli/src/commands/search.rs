use crate::app::AppContext;
use crate::cli::geography::SearchArgs;
use crate::cli::root::OutputFormat;
use crate::db;
use crate::error::CliError;
use crate::output;

pub async fn run(context: &AppContext, args: SearchArgs) -> Result<(), CliError> {
    let census = db::open(context).await?;
    let matches = census.search(&args.name, args.vintage.as_deref()).await?;

    match args.format {
        OutputFormat::Json => output::print_json(&matches)?,
        OutputFormat::Table => output::print_matches_table(&matches),
    }
    Ok(())
}
