use std::fs;
use marketplace_facets::config::config_manager::ConfigManager;
use marketplace_facets::errors::MarketplaceError;
use marketplace_facets::services::facet_deriver::MarketplaceSettings;
use tempfile::TempDir;

#[test]
fn sample_config_round_trips_through_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigManager::create_sample_config(&path).unwrap();
    let config = ConfigManager::load_from(&path).unwrap();

    assert!(config.features.marketplace.is_enabled);
    assert_eq!(config.flags.get("marketplace_exp"), Some(&false));
    assert_eq!(config.cache.stale_time_secs, None);
    assert!(ConfigManager::validate_config(&config).is_ok());

    let settings = MarketplaceSettings::from_config(&config);
    assert_eq!(settings.categories_url, "https://example.org/marketplace/categories.json");
    assert_eq!(settings.stale_time, None);
}

#[test]
fn sample_config_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let error = ConfigManager::create_sample_config(&path).unwrap_err();
    assert!(matches!(error, MarketplaceError::ConfigurationFileError { .. }));
}

#[test]
fn missing_file_gives_disabled_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();

    assert!(!config.features.marketplace.is_enabled);
    assert_eq!(MarketplaceSettings::from_config(&config).categories_url, "");
}

#[test]
fn partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[features.marketplace]
is_enabled = true
categories_url = "https://host/categories"

[cache]
stale_time_secs = 60
"#,
    )
    .unwrap();

    let config = ConfigManager::load_from(&path).unwrap();

    assert_eq!(config.http.timeout_secs, 15);
    assert_eq!(config.flags.get("marketplace_exp"), Some(&false));
    assert_eq!(config.cache.stale_time_secs, Some(60));
}

#[test]
fn invalid_toml_is_a_configuration_file_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[features.marketplace\nis_enabled = ").unwrap();

    let error = ConfigManager::load_from(&path).unwrap_err();
    assert!(matches!(error, MarketplaceError::ConfigurationFileError { ref path, .. } if path.ends_with("config.toml")));
}
