use serde::{Deserialize, Serialize};

use crate::analytics::{SummaryOptions, DEFAULT_HIGH_TRANSPARENCY_THRESHOLD, DEFAULT_TOP_FLAGS};
use crate::errors::ViewStateError;
use crate::formatting::ColorMode;
use crate::view::{RawViewState, SortDirection, SortField};

/// Root configuration structure for shelfscope
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShelfscopeConfig {
    /// Default table view settings
    #[serde(default)]
    pub view: ViewSettings,

    /// Aggregation settings
    #[serde(default)]
    pub analytics: AnalyticsSettings,

    /// Display configuration for output formatting
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Table view defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewSettings {
    /// Initial sort field (default: score)
    #[serde(default = "default_sort_field")]
    pub sort_field: String,

    /// Initial sort direction (default: desc)
    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,

    /// Maximum rows to show; unlimited when absent
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            sort_field: default_sort_field(),
            sort_direction: default_sort_direction(),
            page_size: None,
        }
    }
}

impl ViewSettings {
    /// Check that the configured sort values name real fields.
    pub fn validate(&self) -> Result<(), ViewStateError> {
        SortField::parse(&self.sort_field)?;
        SortDirection::parse(&self.sort_direction)?;
        Ok(())
    }

    /// Starting point for a raw view state, before CLI overrides.
    pub fn raw_view_state(&self) -> RawViewState {
        RawViewState {
            sort_field: self.sort_field.clone(),
            sort_direction: self.sort_direction.clone(),
            ..RawViewState::default()
        }
    }
}

fn default_sort_field() -> String {
    SortField::Score.name().to_string()
}

fn default_sort_direction() -> String {
    SortDirection::Desc.as_str().to_string()
}

/// Aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSettings {
    /// Number of most frequent flags to report (default: 5)
    #[serde(default = "default_top_flags")]
    pub top_flags: usize,

    /// Score at or above which a product counts as high transparency (default: 80)
    #[serde(default = "default_high_transparency_threshold")]
    pub high_transparency_threshold: u32,

    /// Record count at or above which aggregation runs in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            top_flags: default_top_flags(),
            high_transparency_threshold: default_high_transparency_threshold(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl AnalyticsSettings {
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            top_flags: self.top_flags,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn default_top_flags() -> usize {
    DEFAULT_TOP_FLAGS
}

fn default_high_transparency_threshold() -> u32 {
    DEFAULT_HIGH_TRANSPARENCY_THRESHOLD
}

fn default_parallel_threshold() -> usize {
    SummaryOptions::default().parallel_threshold
}

/// Display configuration for output formatting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplaySettings {
    /// Color mode: auto, always or never
    #[serde(default)]
    pub color: ColorMode,
}
