use std::sync::Arc;
use std::time::Duration;
use futures::future::{BoxFuture, FutureExt};
use crate::config::constants::{CATEGORIES_CACHE_KEY, CATEGORIES_RESOURCE, MARKETPLACE_EXPERIMENT_FLAG};
use crate::errors::{MarketplaceError, MarketplaceResult};
use crate::helpers::memo::{ByAddress, Memo};
use crate::services::category_facets::{derive_category_facets, FacetInputs, CATEGORIES_STUB};
use crate::services::query_cache::QueryCache;
use crate::structs::app_overview::AppOverview;
use crate::structs::category_facet::{CategoryFacet, CategoryFacets};
use crate::structs::config::config::Config;
use crate::structs::query_options::QueryOptions;
use crate::structs::query_result::QueryResult;
use crate::traits::category_source::CategorySource;
use crate::traits::flag_evaluator::FlagEvaluator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceSettings {
    /// Empty when the marketplace is disabled or has no categories endpoint.
    pub categories_url: String,
    pub stale_time: Option<Duration>,
}

impl MarketplaceSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            categories_url: config.features.marketplace.categories_url(),
            stale_time: config.cache.stale_time(),
        }
    }
}

#[derive(PartialEq)]
struct FacetKey {
    apps: ByAddress<Vec<AppOverview>>,
    is_apps_placeholder: bool,
    remote: ByAddress<Vec<String>>,
    is_remote_placeholder: bool,
    is_experiment: bool,
}

#[derive(PartialEq)]
struct OutputKey {
    is_placeholder_data: bool,
    categories: ByAddress<Vec<CategoryFacet>>,
}

/// Category facets for the marketplace filter.
///
/// Every call to [`categories`](Self::categories) is one render: it reads the
/// cached remote category list (starting the one fetch if needed), evaluates
/// the experiment flag and derives facets. Unchanged inputs give back the
/// same `Arc`.
pub struct CategoryFacetDeriver {
    settings: MarketplaceSettings,
    cache: QueryCache<Vec<String>>,
    source: Arc<dyn CategorySource>,
    flags: Arc<dyn FlagEvaluator>,
    categories_memo: Memo<FacetKey, Vec<CategoryFacet>>,
    output_memo: Memo<OutputKey, CategoryFacets>,
}

impl CategoryFacetDeriver {
    pub fn new(
        settings: MarketplaceSettings,
        cache: QueryCache<Vec<String>>,
        source: Arc<dyn CategorySource>,
        flags: Arc<dyn FlagEvaluator>,
    ) -> Self {
        Self {
            settings,
            cache,
            source,
            flags,
            categories_memo: Memo::new(),
            output_memo: Memo::new(),
        }
    }

    pub fn categories_url(&self) -> &str {
        &self.settings.categories_url
    }

    pub fn is_remote_enabled(&self) -> bool {
        !self.settings.categories_url.is_empty()
    }

    pub fn categories(&self, apps: Option<Arc<Vec<AppOverview>>>, is_apps_placeholder: bool) -> Arc<CategoryFacets> {
        let options = self.query_options();
        let query = self.cache.observe(CATEGORIES_CACHE_KEY, || self.remote_fetch(), &options);
        self.render(apps, is_apps_placeholder, &query)
    }

    /// Waits for the remote category list (when enabled) before rendering.
    pub async fn resolve(&self, apps: Option<Arc<Vec<AppOverview>>>, is_apps_placeholder: bool) -> Arc<CategoryFacets> {
        let options = self.query_options();
        let query = self.cache.fetch(CATEGORIES_CACHE_KEY, || self.remote_fetch(), &options).await;
        self.render(apps, is_apps_placeholder, &query)
    }

    pub fn remote_error(&self) -> Option<MarketplaceError> {
        self.cache.error(CATEGORIES_CACHE_KEY)
    }

    /// Forgets the fetched category list so the next render fetches again.
    pub fn invalidate(&self) -> bool {
        self.cache.invalidate(CATEGORIES_CACHE_KEY)
    }

    fn query_options(&self) -> QueryOptions<Vec<String>> {
        let enabled = self.is_remote_enabled();
        QueryOptions::new(CATEGORIES_RESOURCE)
            .placeholder(enabled.then(|| Arc::clone(&CATEGORIES_STUB)))
            .stale_time(self.settings.stale_time)
            .enabled(enabled)
    }

    fn remote_fetch(&self) -> BoxFuture<'static, MarketplaceResult<Vec<String>>> {
        let source = Arc::clone(&self.source);
        let url = self.settings.categories_url.clone();
        async move { source.fetch_categories(&url).await }.boxed()
    }

    fn render(
        &self,
        apps: Option<Arc<Vec<AppOverview>>>,
        is_apps_placeholder: bool,
        query: &QueryResult<Vec<String>>,
    ) -> Arc<CategoryFacets> {
        if let Some(error) = &query.error {
            log::debug!("Remote categories unavailable, using app categories: {error}");
        }

        let is_experiment = self.flags.get_flag_value(MARKETPLACE_EXPERIMENT_FLAG, false).value;
        let is_remote_placeholder = query.is_placeholder_data;

        let key = FacetKey {
            apps: ByAddress(apps.clone()),
            is_apps_placeholder,
            remote: ByAddress(query.data.clone()),
            is_remote_placeholder,
            is_experiment,
        };
        let categories = self.categories_memo.get_or_compute(key, || {
            derive_category_facets(&FacetInputs {
                apps: apps.as_deref().map(Vec::as_slice),
                is_apps_placeholder,
                remote_categories: query.data.as_deref().map(Vec::as_slice),
                is_remote_placeholder,
                is_experiment,
            })
        });

        let is_placeholder_data = is_apps_placeholder || is_remote_placeholder;
        let output_key = OutputKey {
            is_placeholder_data,
            categories: ByAddress(Some(Arc::clone(&categories))),
        };
        self.output_memo.get_or_compute(output_key, || CategoryFacets {
            is_placeholder_data,
            data: Arc::clone(&categories),
        })
    }
}
