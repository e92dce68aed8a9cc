use super::geography::{ResolveArgs, SearchArgs, SummaryArgs};
use super::table::TableArgs;
use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "census")]
#[command(about = "American Community Survey lookups")]
pub struct Cli {
    /// Directory holding one `<vintage>.sqlite` file per vintage.
    #[arg(
        long,
        global = true,
        env = "CENSUS_DATA_DIR",
        value_hint = ValueHint::DirPath,
        conflicts_with = "database_url"
    )]
    pub data_dir: Option<PathBuf>,

    /// PostgreSQL connection URL; each vintage is a schema.
    #[arg(long, global = true, env = "CENSUS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Comma-separated vintage ranking, most preferred first.
    #[arg(long, global = true, env = "CENSUS_VINTAGES", value_delimiter = ',')]
    pub vintages: Option<Vec<String>>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the vintage catalog in preference order.
    Vintages,
    /// Find the vintage and row key of a geoid.
    Resolve(ResolveArgs),
    /// Search geographies by name prefix.
    Search(SearchArgs),
    /// Print the summary document of a geoid as JSON.
    Summary(SummaryArgs),
    /// Project one ACS table onto a set of geographies.
    Table(TableArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
