//! Options shared by every command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::SearchConfig;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON file with algorithm configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommonArgs {
    /// The configuration file's contents, or defaults without one.
    pub fn load_config(&self) -> Result<SearchConfig> {
        match &self.config {
            Some(path) => SearchConfig::from_path(path)
                .with_context(|| format!("loading configuration from {}", path.display())),
            None => Ok(SearchConfig::default()),
        }
    }
}
