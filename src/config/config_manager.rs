use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::errors::{MarketplaceError, MarketplaceResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn load() -> MarketplaceResult<Config> {
        Self::load_from(&Self::default_path())
    }

    /// Reads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> MarketplaceResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| MarketplaceError::config_file_error(&path.display().to_string(), &e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| MarketplaceError::config_file_error(&path.display().to_string(), e.message()))
    }

    pub fn create_sample_config(path: &Path) -> MarketplaceResult<()> {
        let sample_config = r#"# Marketplace facets configuration

[features.marketplace]
# Disabled marketplaces never fetch categories
is_enabled = true

# Endpoint returning a JSON array of category names
categories_url = "https://example.org/marketplace/categories.json"

# Experiment flags, overridable with --flag name=value
[flags]
marketplace_exp = false

[http]
timeout_secs = 15

[cache]
# Leave unset to keep fetched categories for the whole session
# stale_time_secs = 300
"#;
        if path.exists() {
            return Err(MarketplaceError::config_file_error(
                &path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let marketplace = &config.features.marketplace;

        if marketplace.is_enabled {
            match marketplace.categories_url.as_deref().map(str::trim) {
                None | Some("") => {
                    log::warn!("⚠️ Marketplace is enabled without categories_url; categories come from apps only");
                }
                Some(url) => match Url::parse(url) {
                    Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                    Ok(parsed) => errors.push(format!("categories_url uses unsupported scheme '{}'", parsed.scheme())),
                    Err(e) => errors.push(format!("categories_url '{url}' is not a valid URL: {e}")),
                },
            }
        }

        if config.http.timeout_secs == 0 {
            errors.push("http.timeout_secs must be greater than zero".to_string());
        }

        if config.cache.stale_time_secs == Some(0) {
            errors.push("cache.stale_time_secs must be greater than zero when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::marketplace_config::MarketplaceConfig;

    fn config_with_url(url: &str) -> Config {
        let mut config = Config::default();
        config.features.marketplace = MarketplaceConfig {
            is_enabled: true,
            categories_url: Some(url.to_string()),
        };
        config
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ConfigManager::validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let errors = ConfigManager::validate_config(&config_with_url("ftp://host/categories")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ftp"));
    }

    #[test]
    fn rejects_unparseable_url_and_zero_timeout() {
        let mut config = config_with_url("not a url");
        config.http.timeout_secs = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn ignores_url_when_feature_disabled() {
        let mut config = config_with_url("not a url");
        config.features.marketplace.is_enabled = false;
        assert!(ConfigManager::validate_config(&config).is_ok());
    }
}
