use super::root::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Table id such as `b01001`.
    pub table: String,

    #[arg(long)]
    pub vintage: String,

    /// Comma-separated geoids. With `--sumlevel`, the single parent geoid.
    #[arg(long)]
    pub geoids: String,

    /// Expand the parent to its children at this level (50 or 60).
    #[arg(long)]
    pub sumlevel: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
