use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ShelfscopeConfig;
use crate::errors::Error;

/// Project-level config file name, searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = ".shelfscope.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ShelfscopeConfig, String> {
    let config = toml::from_str::<ShelfscopeConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config.view.validate().map_err(|e| e.to_string())?;

    Ok(config)
}

/// Load a config file named explicitly by the user. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<ShelfscopeConfig, Error> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    let config = parse_and_validate_config(&contents).map_err(|msg| Error::config(path, msg))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Try loading config from a discovered path; problems are logged, not fatal
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ShelfscopeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %config_path.display(), "{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            path = %config_path.display(),
            error = %error,
            "Failed to read config file"
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// User-level config location, e.g. `~/.config/shelfscope/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfscope").join("config.toml"))
}

/// Discover config starting at `start`: ancestors first, then the user config.
pub fn load_config_starting_at(start: PathBuf) -> ShelfscopeConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "No config found. Using default config."
            );
            ShelfscopeConfig::default()
        })
}

/// Discover config from the current directory.
pub fn load_config() -> ShelfscopeConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_starting_at(dir),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to get current directory. Using default config."
            );
            ShelfscopeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ColorMode;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, ShelfscopeConfig::default());
        assert_eq!(config.view.sort_field, "score");
        assert_eq!(config.view.sort_direction, "desc");
        assert_eq!(config.analytics.top_flags, 5);
        assert_eq!(config.analytics.high_transparency_threshold, 80);
    }

    #[test]
    fn test_full_config_parses() {
        let toml = indoc! {r#"
            [view]
            sort_field = "productName"
            sort_direction = "asc"
            page_size = 25

            [analytics]
            top_flags = 3
            high_transparency_threshold = 90

            [display]
            color = "never"
        "#};

        let config = parse_and_validate_config(toml).unwrap();

        assert_eq!(config.view.sort_field, "productName");
        assert_eq!(config.view.page_size, Some(25));
        assert_eq!(config.analytics.top_flags, 3);
        assert_eq!(config.analytics.high_transparency_threshold, 90);
        assert_eq!(config.analytics.parallel_threshold, 10_000);
        assert_eq!(config.display.color, ColorMode::Never);
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let toml = indoc! {r#"
            [view]
            sort_field = "price"
        "#};

        let err = parse_and_validate_config(toml).unwrap_err();
        assert!(err.contains("unknown sort field 'price'"), "{err}");
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(parse_and_validate_config("[view\nsort_field=").is_err());
    }

    #[test]
    fn test_directory_ancestors_limits_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discovers_config_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("catalogs").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[analytics]\ntop_flags = 2\n",
        )
        .unwrap();

        let config = load_config_starting_at(nested);

        assert_eq!(config.analytics.top_flags, 2);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[view]\nsort_direction = \"sideways\"\n",
        )
        .unwrap();

        assert!(try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME)).is_none());
    }

    #[test]
    fn test_explicit_config_errors_are_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[view]\nsort_field = \"price\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let missing = load_config_from(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, Error::Io { .. }));
    }
}
