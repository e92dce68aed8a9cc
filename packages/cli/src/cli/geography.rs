use super::root::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    pub geoid: String,

    /// Only look in this vintage.
    #[arg(long)]
    pub vintage: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Leading part of the geography name.
    pub name: String,

    #[arg(long)]
    pub vintage: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    pub geoid: String,

    #[arg(long)]
    pub vintage: Option<String>,
}
