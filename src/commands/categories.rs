use super::load_catalog;
use crate::output::terminal::render_category_options;
use crate::output::write_output;
use anyhow::Result;
use std::path::Path;

pub fn handle_categories(snapshot: &Path) -> Result<()> {
    let catalog = load_catalog(snapshot)?;
    write_output(&render_category_options(&catalog.category_options()), None)
}
