//! CLI command implementations.
//!
//! Each submodule handles one subcommand: it loads configuration and the
//! catalog snapshot, runs an engine, renders the result, and writes it out.
//!
//! Available commands:
//! - **list**: filtered, searched and sorted product table
//! - **show**: every detail of one product
//! - **summary**: portfolio overview and aggregate summary
//! - **categories**: category filter options
//! - **init**: write a default `.shelfscope.toml`

pub mod categories;
pub mod init;
pub mod list;
pub mod show;
pub mod summary;

pub use categories::handle_categories;
pub use init::{init_config, init_config_in};
pub use list::{handle_list, ListConfig};
pub use show::{handle_show, ShowConfig};
pub use summary::{handle_summary, SummaryConfig};

use crate::catalog::Catalog;
use crate::config::{load_config, load_config_from, ShelfscopeConfig};
use crate::formatting::FormattingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file; discovery is used when absent.
    pub config: Option<PathBuf>,
    pub plain: bool,
}

impl GlobalOptions {
    pub fn load_config(&self) -> Result<ShelfscopeConfig> {
        match &self.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(load_config()),
        }
    }

    pub fn formatting(&self, config: &ShelfscopeConfig) -> FormattingConfig {
        if self.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env(config.display.color)
        }
    }
}

pub(crate) fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("Failed to load snapshot {}", path.display()))
}
