use serde::{Deserialize, Serialize};
use crate::structs::config::marketplace_config::MarketplaceConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub marketplace: MarketplaceConfig,
}
