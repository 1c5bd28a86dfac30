use crate::{Error, Result};
use rollcall_engine::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_DELTA, DEFAULT_WINDOW_WIDTH, PageSizeOptions, WindowStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FILTER_DELAY_MS: u64 = 200;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROLLCALL_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.rollcall/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ROLLCALL_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rollcall").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rollcall").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub page_size_options: PageSizeOptions,
    pub enabled: bool,
    pub window: WindowStyle,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PageSizeOptions::default(),
            enabled: true,
            window: WindowStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub delay_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_FILTER_DELAY_MS,
        }
    }
}

impl FilterConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Repair values the views cannot use, logging a warning per repair.
    pub fn validated(mut self) -> Self {
        for warning in self.repair() {
            tracing::warn!("{}", warning);
        }
        self
    }

    /// Apply repairs in place and describe each one.
    pub fn repair(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        let pagination = &mut self.pagination;

        if pagination.page_size_options.is_empty() {
            warnings.push(format!(
                "pagination.page_size_options is empty, using {:?}",
                PageSizeOptions::default().as_slice()
            ));
            pagination.page_size_options = PageSizeOptions::default();
        }

        if pagination.page_size == 0 {
            let fallback = pagination
                .page_size_options
                .as_slice()
                .first()
                .copied()
                .unwrap_or(DEFAULT_PAGE_SIZE);
            warnings.push(format!("pagination.page_size is 0, using {}", fallback));
            pagination.page_size = fallback;
        }

        if !pagination.page_size_options.contains(pagination.page_size) {
            warnings.push(format!(
                "pagination.page_size {} is not in page_size_options, adding it",
                pagination.page_size
            ));
            pagination.page_size_options =
                PageSizeOptions::new(pagination.page_size_options.choices(pagination.page_size));
        }

        match pagination.window {
            WindowStyle::Sliding { width: 0 } => {
                warnings.push(format!(
                    "pagination.window.width is 0, using {}",
                    DEFAULT_WINDOW_WIDTH
                ));
                pagination.window = WindowStyle::Sliding {
                    width: DEFAULT_WINDOW_WIDTH,
                };
            }
            WindowStyle::Ellipsis { delta: 0 } => {
                warnings.push(format!(
                    "pagination.window.delta is 0, using {}",
                    DEFAULT_WINDOW_DELTA
                ));
                pagination.window = WindowStyle::Ellipsis {
                    delta: DEFAULT_WINDOW_DELTA,
                };
            }
            _ => {}
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pagination.page_size, 30);
        assert_eq!(config.pagination.page_size_options.as_slice(), &[30, 50, 100]);
        assert!(config.pagination.enabled);
        assert_eq!(config.pagination.window, WindowStyle::Sliding { width: 9 });
        assert_eq!(config.filter.delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.pagination.page_size = 50;
        config.pagination.window = WindowStyle::ellipsis();
        config.filter.delay_ms = 350;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[pagination]\npage_size = 50\nwindow = { style = \"ellipsis\" }\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.pagination.page_size, 50);
        assert_eq!(config.pagination.page_size_options.as_slice(), &[30, 50, 100]);
        assert_eq!(config.pagination.window, WindowStyle::Ellipsis { delta: 4 });
        assert_eq!(config.filter.delay_ms, 200);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_load_malformed_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[pagination\npage_size = ")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_repair_empty_options_and_zero_size() {
        let mut config = Config::default();
        config.pagination.page_size = 0;
        config.pagination.page_size_options = PageSizeOptions::new(Vec::new());

        let warnings = config.repair();

        assert_eq!(warnings.len(), 2);
        assert_eq!(config.pagination.page_size, 30);
        assert_eq!(config.pagination.page_size_options.as_slice(), &[30, 50, 100]);
    }

    #[test]
    fn test_repair_appends_unlisted_page_size() {
        let mut config = Config::default();
        config.pagination.page_size = 25;

        let warnings = config.repair();

        assert_eq!(warnings.len(), 1);
        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(
            config.pagination.page_size_options.as_slice(),
            &[30, 50, 100, 25]
        );
    }

    #[test]
    fn test_repair_zero_width_window() {
        let mut config = Config::default();
        config.pagination.window = WindowStyle::Sliding { width: 0 };

        config.repair();
        assert_eq!(config.pagination.window, WindowStyle::sliding());
    }

    #[test]
    fn test_valid_config_needs_no_repair() {
        let mut config = Config::default();
        assert!(config.repair().is_empty());
        assert_eq!(config.validated(), Config::default());
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/rollcall-test/config.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/rollcall-test/config.toml"));
        Ok(())
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                expand_tilde("~/rollcall.toml"),
                PathBuf::from(home).join("rollcall.toml")
            );
        }
        assert_eq!(expand_tilde("relative.toml"), PathBuf::from("relative.toml"));
    }
}
