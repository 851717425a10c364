//! Application configuration.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    pagination::PAGE_SIZE,
    theme::THEME_STORAGE_KEY,
};

/// Main configuration structure for Taskboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Pagination settings.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Theme persistence settings.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Endpoint returning a JSON array of posts.
    #[serde(default = "default_posts_url")]
    pub posts_url: String,
}

/// Pagination configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationConfig {
    /// Number of posts per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Local storage key for the preference.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

// Default value functions
fn default_posts_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

fn default_storage_key() -> String {
    THEME_STORAGE_KEY.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            posts_url: default_posts_url(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse configuration", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration, falling back to defaults on any error.
    pub fn from_toml_or_default(content: &str) -> Self {
        Self::from_toml_str(content).unwrap_or_else(|err| {
            log::warn!("{err}; using default configuration");
            Self::default()
        })
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.api.posts_url.is_empty() {
            return Err(CoreError::config("api.posts_url cannot be empty"));
        }

        if self.pagination.page_size == 0 {
            return Err(CoreError::config("pagination.page_size must be positive"));
        }

        if self.theme.storage_key.is_empty() {
            return Err(CoreError::config("theme.storage_key cannot be empty"));
        }

        if !self.api.posts_url.starts_with("https://") {
            log::warn!("api.posts_url is not served over https");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let config = AppConfig::from_toml_str(
            r#"
[api]
posts_url = "https://example.com/posts"

[pagination]
page_size = 5

[theme]
storage_key = "taskboard-theme"
"#,
        )
        .expect("load config");

        assert_eq!(config.api.posts_url, "https://example.com/posts");
        assert_eq!(config.pagination.page_size, 5);
        assert_eq!(config.theme.storage_key, "taskboard-theme");
    }

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_toml_str("").expect("load config");

        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.api.posts_url,
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[pagination]\npage_size = 20\n").expect("load");
        assert_eq!(config.pagination.page_size, 20);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_config_validation_zero_page_size() {
        let result = AppConfig::from_toml_str("[pagination]\npage_size = 0\n");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("page_size must be positive")
        );
    }

    #[test]
    fn test_config_validation_empty_url() {
        let result = AppConfig::from_toml_str("[api]\nposts_url = \"\"\n");
        assert!(result.unwrap_err().to_string().contains("posts_url"));
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = AppConfig::from_toml_or_default("[pagination\npage_size = ");
        assert_eq!(config, AppConfig::default());
    }
}
