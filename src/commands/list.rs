use super::{load_catalog, GlobalOptions};
use crate::config::ShelfscopeConfig;
use crate::output::json::view_to_json;
use crate::output::terminal::render_view;
use crate::output::{write_output, OutputFormat};
use crate::view::{compute_page, RawViewState};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info_span;

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub snapshot: PathBuf,
    pub search: String,
    pub status: String,
    pub category: String,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub limit: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl ListConfig {
    /// Config file defaults, overridden by whatever was passed on the command line.
    pub fn raw_view_state(&self, settings: &ShelfscopeConfig) -> RawViewState {
        let mut raw = settings.view.raw_view_state();
        if let Some(sort) = &self.sort {
            raw.sort_field = sort.clone();
        }
        if let Some(direction) = &self.direction {
            raw.sort_direction = direction.clone();
        }
        raw.search = self.search.clone();
        raw.status = self.status.clone();
        raw.category = self.category.clone();
        raw
    }
}

pub fn handle_list(config: ListConfig, global: &GlobalOptions) -> Result<()> {
    let _span = info_span!("list", snapshot = %config.snapshot.display()).entered();

    let settings = global.load_config()?;
    let catalog = load_catalog(&config.snapshot)?;
    let state = config
        .raw_view_state(&settings)
        .resolve(catalog.records())?;

    let limit = config.limit.or(settings.view.page_size);
    let page = compute_page(catalog.records(), &state, limit);

    let content = match config.format {
        OutputFormat::Terminal => {
            let formatter = global.formatting(&settings).formatter();
            render_view(&page, &state, formatter.as_ref())
        }
        OutputFormat::Json => view_to_json(&page, &state)?,
    };
    write_output(&content, config.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;

    fn list_config() -> ListConfig {
        ListConfig {
            snapshot: PathBuf::from("catalog.json"),
            search: String::new(),
            status: "all".into(),
            category: "all".into(),
            sort: None,
            direction: None,
            limit: None,
            format: OutputFormat::Terminal,
            output: None,
        }
    }

    #[test]
    fn test_config_sort_used_when_flags_absent() {
        let settings =
            parse_and_validate_config("[view]\nsort_field = \"productName\"\nsort_direction = \"asc\"\n")
                .unwrap();

        let raw = list_config().raw_view_state(&settings);

        assert_eq!(raw.sort_field, "productName");
        assert_eq!(raw.sort_direction, "asc");
    }

    #[test]
    fn test_flags_override_config() {
        let settings = parse_and_validate_config("[view]\nsort_field = \"productName\"\n").unwrap();
        let config = ListConfig {
            sort: Some("category".into()),
            direction: Some("asc".into()),
            search: "oat".into(),
            ..list_config()
        };

        let raw = config.raw_view_state(&settings);

        assert_eq!(raw.sort_field, "category");
        assert_eq!(raw.sort_direction, "asc");
        assert_eq!(raw.search, "oat");
    }
}
