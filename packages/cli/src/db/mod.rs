use crate::app::AppContext;
use crate::error::CliError;
use census_rs_sdk::{
    open_census, Census, CensusBackend, OpenCensusConfig, PostgresBackend, PostgresConfig,
    SqliteBackend, VintageCatalog,
};

/// The default ACS ranking unless `--vintages` overrides it.
pub fn catalog(context: &AppContext) -> Result<VintageCatalog, CliError> {
    match &context.vintages {
        Some(ids) => Ok(VintageCatalog::from_ids(ids)?),
        None => Ok(VintageCatalog::acs_default()),
    }
}

pub async fn open(context: &AppContext) -> Result<Census, CliError> {
    let catalog = catalog(context)?;
    let backend: Box<dyn CensusBackend + Send + Sync> =
        match (&context.data_dir, &context.database_url) {
            (Some(dir), None) => {
                let backend = SqliteBackend::open_data_dir(dir, &catalog).map_err(|err| {
                    CliError::msg(format!(
                        "failed to open data directory {}: {}",
                        dir.display(),
                        err
                    ))
                })?;
                Box::new(backend)
            }
            (None, Some(url)) => {
                let backend = PostgresBackend::connect(&PostgresConfig::new(url.as_str()))
                    .await
                    .map_err(|err| CliError::msg(format!("failed to open database: {err}")))?;
                Box::new(backend)
            }
            (Some(_), Some(_)) => {
                return Err(CliError::InvalidArgs(
                    "pass either --data-dir or --database-url, not both",
                ))
            }
            (None, None) => {
                return Err(CliError::InvalidArgs(
                    "no census store configured; pass --data-dir or --database-url",
                ))
            }
        };

    Ok(open_census(OpenCensusConfig { backend, catalog }).await?)
}
