use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::cache_config::CacheConfig;
use crate::structs::config::features_config::FeaturesConfig;
use crate::structs::config::http_config::HttpConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default = "ConfigHelper::default_flags")]
    pub flags: HashMap<String, bool>,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            features: FeaturesConfig::default(),
            flags: ConfigHelper::default_flags(),
            http: HttpConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}
