use crate::config::CONFIG_FILE_NAME;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Shelfscope Configuration

[view]
# id, productName, category, score, status or lastUpdated
sort_field = "score"
sort_direction = "desc"
# page_size = 50

[analytics]
top_flags = 5
high_transparency_threshold = 80
parallel_threshold = 10000

[display]
# auto, always or never
color = "auto"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to read current directory")?;
    let path = init_config_in(&dir, force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default config into `dir`, returning the file path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "Wrote default config");
    Ok(config_path)
}
