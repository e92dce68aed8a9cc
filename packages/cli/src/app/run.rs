use super::context::AppContext;
use crate::cli::root::{Cli, Command};
use crate::commands;
use crate::error::CliError;
use clap::Parser;

pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let context = AppContext {
        data_dir: cli.data_dir,
        database_url: cli.database_url,
        vintages: cli.vintages,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| CliError::io("failed to start async runtime", source))?;

    runtime.block_on(async {
        match cli.command {
            Command::Vintages => commands::vintages::run(&context),
            Command::Resolve(args) => commands::resolve::run(&context, args).await,
            Command::Search(args) => commands::search::run(&context, args).await,
            Command::Summary(args) => commands::summary::run(&context, args).await,
            Command::Table(args) => commands::table::run(&context, args).await,
        }
    })
}
