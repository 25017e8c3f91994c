use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::CATEGORIES_RESOURCE;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::errors::{MarketplaceError, MarketplaceResult};
use crate::logger::facet_logger::FacetLogger;
use crate::logger::fetch_spinner::FetchSpinner;
use crate::services::api_fetch::ApiFetch;
use crate::services::app_catalog::AppCatalog;
use crate::services::facet_deriver::{CategoryFacetDeriver, MarketplaceSettings};
use crate::services::feature_flags::ConfigFlagEvaluator;
use crate::services::query_cache::QueryCache;
use crate::structs::app_overview::AppOverview;
use crate::structs::category_facet::CategoryFacets;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> MarketplaceResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { path } => Self::init_command(path),
            Commands::Validate { config } => Self::validate_command(config),
            Commands::Categories { apps, config, placeholder, flags, format, no_wait } => {
                Self::categories_command(&apps, config, placeholder, &flags, format, no_wait).await
            }
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(path: Option<PathBuf>) -> MarketplaceResult<()> {
        let path = path.unwrap_or_else(ConfigManager::default_path);
        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Edit {} to point at your categories endpoint.", path.display());
        log::info!("🔧 Run 'marketplace-facets validate' to check it.");
        Ok(())
    }

    fn validate_command(config_path: Option<PathBuf>) -> MarketplaceResult<()> {
        let config = Self::load_config(config_path.as_deref())?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                let url = config.features.marketplace.categories_url();
                if url.is_empty() {
                    log::info!("✅ Configuration is valid (remote categories disabled)");
                } else {
                    log::info!("✅ Configuration is valid (categories from {url})");
                }
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {error}");
                }
                Err(MarketplaceError::config_error(
                    &format!("{} problem(s) found", errors.len()),
                    None,
                    Some("fix the entries listed above"),
                ))
            }
        }
    }

    async fn categories_command(
        apps_path: &Path,
        config_path: Option<PathBuf>,
        is_apps_placeholder: bool,
        raw_flags: &[String],
        format: OutputFormat,
        no_wait: bool,
    ) -> MarketplaceResult<()> {
        let config = Self::load_config(config_path.as_deref())?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            return Err(MarketplaceError::config_error(&errors.join("; "), None, Some("run 'marketplace-facets validate'")));
        }

        let overrides = raw_flags
            .iter()
            .map(|raw| ConfigFlagEvaluator::parse_override(raw))
            .collect::<MarketplaceResult<Vec<_>>>()?;

        let apps = Arc::new(AppCatalog::load(apps_path)?);
        let deriver = Self::build_deriver(&config, &overrides)?;

        let facets = if no_wait {
            deriver.categories(Some(apps), is_apps_placeholder)
        } else {
            Self::resolve_with_spinner(&deriver, apps, is_apps_placeholder).await
        };

        Self::print(&facets, format)
    }

    pub fn build_deriver(config: &Config, overrides: &[(String, bool)]) -> MarketplaceResult<CategoryFacetDeriver> {
        let source = Arc::new(ApiFetch::new(&config.http)?);
        let flags = Arc::new(ConfigFlagEvaluator::new(config.flags.clone()).with_overrides(overrides));

        Ok(CategoryFacetDeriver::new(
            MarketplaceSettings::from_config(config),
            QueryCache::new(),
            source,
            flags,
        ))
    }

    async fn resolve_with_spinner(
        deriver: &CategoryFacetDeriver,
        apps: Arc<Vec<AppOverview>>,
        is_apps_placeholder: bool,
    ) -> Arc<CategoryFacets> {
        if !deriver.is_remote_enabled() {
            return deriver.resolve(Some(apps), is_apps_placeholder).await;
        }

        let spinner = FetchSpinner::start(CATEGORIES_RESOURCE);
        let facets = deriver.resolve(Some(apps), is_apps_placeholder).await;
        let error = deriver.remote_error();
        spinner.finish(error.is_none()).await;

        if let Some(error) = error {
            log::warn!("⚠️ {}", error.user_message());
        }
        facets
    }

    fn load_config(path: Option<&Path>) -> MarketplaceResult<Config> {
        match path {
            Some(path) if !path.exists() => Err(MarketplaceError::config_file_error(
                &path.display().to_string(),
                "file not found",
            )),
            Some(path) => ConfigManager::load_from(path),
            None => ConfigManager::load(),
        }
    }

    fn print(facets: &CategoryFacets, format: OutputFormat) -> MarketplaceResult<()> {
        match format {
            OutputFormat::Table => {
                FacetLogger::print_table(facets);
                Ok(())
            }
            OutputFormat::Json => FacetLogger::print_json(facets),
        }
    }
}
