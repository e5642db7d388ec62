//! Configuration loaded from `.shelfscope.toml`.
//!
//! Discovery walks up to ten ancestor directories from the working
//! directory, then falls back to the user config directory, then to
//! defaults. A file passed with `--config` is loaded strictly.

mod core;
mod loader;

pub use core::{AnalyticsSettings, DisplaySettings, ShelfscopeConfig, ViewSettings};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_starting_at,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
