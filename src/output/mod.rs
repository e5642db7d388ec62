//! Renderers for the engines' outputs.
//!
//! Renderers are pure: they turn rows, records and summaries into strings.
//! [`write_output`] is the single place that touches stdout or files.

pub mod json;
pub mod terminal;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Terminal,
    /// Pretty-printed JSON
    Json,
}

/// Write rendered output to a file, or stdout when no path is given.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                file.write_all(b"\n")?;
            }
        }
        None => println!("{content}"),
    }
    Ok(())
}
