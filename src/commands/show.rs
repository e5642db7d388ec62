use super::{load_catalog, GlobalOptions};
use crate::output::json::product_to_json;
use crate::output::terminal::render_product_detail;
use crate::output::{write_output, OutputFormat};
use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::info_span;

#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub snapshot: PathBuf,
    pub id: String,
    pub format: OutputFormat,
}

pub fn handle_show(config: ShowConfig, global: &GlobalOptions) -> Result<()> {
    let _span = info_span!("show", id = %config.id).entered();

    let settings = global.load_config()?;
    let catalog = load_catalog(&config.snapshot)?;
    let Some(product) = catalog.find(&config.id) else {
        bail!(
            "No product with id '{}' in {}",
            config.id,
            config.snapshot.display()
        );
    };

    let content = match config.format {
        OutputFormat::Terminal => {
            let formatter = global.formatting(&settings).formatter();
            render_product_detail(product, formatter.as_ref())
        }
        OutputFormat::Json => product_to_json(product)?,
    };
    write_output(&content, None)
}
