use crate::app::AppContext;
use crate::cli::geography::SummaryArgs;
use crate::db;
use crate::error::CliError;
use crate::output;
use census_rs_sdk::Geoid;

pub async fn run(context: &AppContext, args: SummaryArgs) -> Result<(), CliError> {
    let geoid = Geoid::parse(&args.geoid)?;
    let census = db::open(context).await?;
    let vintage = args.vintage.as_deref();

    let resolved = census
        .resolve(&geoid, vintage)
        .await
        .map_err(|err| CliError::from_lookup(err, vintage))?;
    tracing::debug!(geoid = %geoid, vintage = %resolved.vintage, "resolved geoid");

    let document = census.assemble(&resolved.vintage, &resolved.key).await?;
    output::print_json(&document)
}
