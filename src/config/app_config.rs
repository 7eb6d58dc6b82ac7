use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::errors::{AdminLogError, Result};
use crate::core::services::pagination::PagingSettings;

/// Top-level adminlog configuration read from `config.toml`.
///
/// Every section is optional; missing values fall back to the defaults
/// the web console ships with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub view: ViewSection,
    pub search: SearchSection,
}

impl AppConfig {
    /// Load the configuration from `path`.
    ///
    /// When `required` is false a missing file yields the defaults; an
    /// explicitly requested file must exist.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                return Err(AdminLogError::InvalidConfig {
                    path: path.to_path_buf(),
                    detail: "file not found".into(),
                });
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AdminLogError::InvalidConfig {
            path: path.to_path_buf(),
            detail: format!("Failed to parse: {e}"),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Default location: `{config_dir}/adminlog/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("adminlog").join("config.toml"))
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |detail: String| AdminLogError::InvalidConfig {
            path: path.to_path_buf(),
            detail,
        };

        let url = self.server.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid(format!(
                "server.base_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.server.timeout_secs == 0 {
            return Err(invalid("server.timeout_secs must be greater than 0".into()));
        }
        if self.view.page_size_options.is_empty() || self.view.page_size_options.contains(&0) {
            return Err(invalid(
                "view.page_size_options must list at least one positive size".into(),
            ));
        }
        if !self.view.page_size_options.contains(&self.view.default_page_size) {
            return Err(invalid(format!(
                "view.default_page_size ({}) is not one of view.page_size_options",
                self.view.default_page_size
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }

    pub fn paging(&self) -> PagingSettings {
        PagingSettings {
            page_size_options: self.view.page_size_options.clone(),
            default_page_size: self.view.default_page_size,
            admin_category: self.search.admin_category,
        }
    }

    /// Default `[start, end]` window in unix seconds relative to `now`.
    pub fn default_window(&self, now: i64) -> (i64, i64) {
        let start = now - i64::from(self.view.default_window_days) * 86_400;
        let end = now + self.view.end_slack_secs;
        (start, end)
    }
}

/// The `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            access_token: None,
            timeout_secs: 10,
        }
    }
}

/// The `[view]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewSection {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// How far back the default time window reaches.
    pub default_window_days: u32,
    /// How far past "now" the default window ends.
    pub end_slack_secs: i64,
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
            default_window_days: 7,
            end_slack_secs: 3600,
        }
    }
}

/// The `[search]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Log `type` code that marks administrative entries in search results.
    pub admin_category: i64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self { admin_category: 3 }
    }
}
