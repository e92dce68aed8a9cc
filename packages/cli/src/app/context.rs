use std::path::PathBuf;

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub data_dir: Option<PathBuf>,
    pub database_url: Option<String>,
    pub vintages: Option<Vec<String>>,
}
