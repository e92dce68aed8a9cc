use crate::app::AppContext;
use crate::db;
use crate::error::CliError;
use crate::output;

pub fn run(context: &AppContext) -> Result<(), CliError> {
    let catalog = db::catalog(context)?;
    output::print_catalog_table(&catalog);
    Ok(())
}
