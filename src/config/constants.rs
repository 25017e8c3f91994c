use std::time::Duration;

pub const CATEGORIES_CACHE_KEY: &str = "marketplace-categories";
pub const CATEGORIES_RESOURCE: &str = "marketplace-categories";
pub const MARKETPLACE_EXPERIMENT_FLAG: &str = "marketplace_exp";

pub const STUB_CATEGORY_PREFIX: &str = "Bridge";
pub const STUB_CATEGORY_COUNT: usize = 9;

pub const CONFIG_PATH_ENV: &str = "MARKETPLACE_FACETS_CONFIG";
pub const CONFIG_DIR_NAME: &str = "marketplace-facets";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = concat!("marketplace-facets/", env!("CARGO_PKG_VERSION"));
pub const SPINNER_FRAME_INTERVAL_MS: u64 = 120;

pub const fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
