/// Application configuration
///
/// Read from `~/.config/book-browser/config.toml` (or the file named by
/// `BOOK_BROWSER_CONFIG`). A missing file means defaults; a broken one
/// stops startup.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::color::{ColorSchemeProbe, ThemePreference};
use crate::error::ConfigError;
use crate::state::pagination::DEFAULT_PAGE_SIZE;

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "BOOK_BROWSER_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog JSON file; the bundled sample when unset
    pub dataset: Option<PathBuf>,
    pub appearance: Appearance,
    pub pagination: PaginationConfig,
}

/// Initial theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the desktop
    #[default]
    Auto,
    Day,
    Night,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// `[start, end]` bounds of the first page. Listings always begin at the
    /// first record, so `start` must be 0 and `end` is the page size.
    pub range: [usize; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            appearance: Appearance::Auto,
            pagination: PaginationConfig::default(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            range: [0, DEFAULT_PAGE_SIZE.get()],
        }
    }
}

impl PaginationConfig {
    /// Validated page size
    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        let [start, end] = self.range;
        if start != 0 {
            return Err(ConfigError::InvalidRange { start, end });
        }
        NonZeroUsize::new(end).ok_or(ConfigError::InvalidRange { start, end })
    }
}

impl AppConfig {
    /// Load from the default location (or `BOOK_BROWSER_CONFIG`).
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);
        Self::load_from(&path)
    }

    /// Load from a specific file. Missing file -> defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Reject a bad page range now rather than at first render
        config.pagination.page_size()?;

        log::info!("⚙️  Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the starting theme, asking the host only in `auto` mode
    pub fn initial_theme(&self, probe: &dyn ColorSchemeProbe) -> ThemePreference {
        match self.appearance {
            Appearance::Auto => ThemePreference::from_probe(probe),
            Appearance::Day => ThemePreference::Day,
            Appearance::Night => ThemePreference::Night,
        }
    }

    /// Get the path where the config file lives
    fn config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("book-browser").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    struct Prefers(bool);

    impl ColorSchemeProbe for Prefers {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.dataset.is_none());
        assert_eq!(config.appearance, Appearance::Auto);
        assert_eq!(config.pagination.page_size().unwrap(), NonZeroUsize::new(36).unwrap());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            dataset = "/srv/books.json"
            appearance = "night"

            [pagination]
            range = [0, 12]
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.dataset, Some(PathBuf::from("/srv/books.json")));
        assert_eq!(config.appearance, Appearance::Night);
        assert_eq!(config.pagination.page_size().unwrap().get(), 12);
    }

    #[test]
    fn test_range_with_one_number_is_fatal() {
        let file = write_config("[pagination]\nrange = [36]\n");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_range_not_numbers_is_fatal() {
        let file = write_config("[pagination]\nrange = \"lots\"\n");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_empty_range_is_fatal() {
        let file = write_config("[pagination]\nrange = [0, 0]\n");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::InvalidRange { start: 0, end: 0 })
        ));
    }

    #[test]
    fn test_range_must_start_at_first_record() {
        // A nonzero start would hide the first records of the catalog
        let file = write_config("[pagination]\nrange = [2, 6]\n");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::InvalidRange { start: 2, end: 6 })
        ));
    }

    #[test]
    fn test_appearance_overrides_desktop() {
        let mut config = AppConfig::default();
        assert_eq!(config.initial_theme(&Prefers(true)), ThemePreference::Night);

        config.appearance = Appearance::Day;
        assert_eq!(config.initial_theme(&Prefers(true)), ThemePreference::Day);

        config.appearance = Appearance::Night;
        assert_eq!(config.initial_theme(&Prefers(false)), ThemePreference::Night);
    }
}
