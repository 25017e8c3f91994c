use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceConfig {
    #[serde(default)]
    pub is_enabled: bool,

    #[serde(default)]
    pub categories_url: Option<String>,
}

impl MarketplaceConfig {
    /// The endpoint to read categories from, or an empty string when the
    /// marketplace is disabled or no endpoint is configured.
    pub fn categories_url(&self) -> String {
        if !self.is_enabled {
            return String::new();
        }
        self.categories_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}
