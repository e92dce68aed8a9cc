use crate::app::AppContext;
use crate::cli::geography::ResolveArgs;
use crate::db;
use crate::error::CliError;
use crate::output;
use census_rs_sdk::Geoid;

pub async fn run(context: &AppContext, args: ResolveArgs) -> Result<(), CliError> {
    let geoid = Geoid::parse(&args.geoid)?;
    let census = db::open(context).await?;
    let vintage = args.vintage.as_deref();
    let resolved = census
        .resolve(&geoid, vintage)
        .await
        .map_err(|err| CliError::from_lookup(err, vintage))?;
    output::print_json(&resolved)
}
