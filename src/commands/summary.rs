use super::{load_catalog, GlobalOptions};
use crate::analytics::{compute_overview, compute_summary_auto};
use crate::output::json::summary_to_json;
use crate::output::terminal::render_summary;
use crate::output::{write_output, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info_span};

#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub snapshot: PathBuf,
    /// Overrides `[analytics] top_flags` when set.
    pub top_flags: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_summary(config: SummaryConfig, global: &GlobalOptions) -> Result<()> {
    let _span = info_span!("summary", snapshot = %config.snapshot.display()).entered();

    let settings = global.load_config()?;
    let catalog = load_catalog(&config.snapshot)?;

    let mut options = settings.analytics.summary_options();
    if let Some(top_flags) = config.top_flags {
        options.top_flags = top_flags;
    }

    let summary = compute_summary_auto(catalog.records(), &options);
    let overview = compute_overview(
        catalog.records(),
        settings.analytics.high_transparency_threshold,
    );
    debug!(
        categories = summary.category_means.len(),
        flags = summary.top_flags.len(),
        "Summary computed"
    );

    let content = match config.format {
        OutputFormat::Terminal => {
            let formatter = global.formatting(&settings).formatter();
            render_summary(&summary, &overview, formatter.as_ref())
        }
        OutputFormat::Json => summary_to_json(&summary, &overview)?,
    };
    write_output(&content, config.output.as_deref())
}
