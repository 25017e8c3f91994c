pub mod config;
pub mod features_config;
pub mod marketplace_config;
pub mod http_config;
pub mod cache_config;
