use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::config::constants::{timeout_duration, CATEGORIES_RESOURCE};
use crate::errors::{MarketplaceError, MarketplaceResult};
use crate::structs::config::http_config::HttpConfig;
use crate::traits::category_source::CategorySource;

/// JSON-over-HTTP reads for named marketplace resources.
#[derive(Clone)]
pub struct ApiFetch {
    client: Client,
}

impl ApiFetch {
    pub fn new(config: &HttpConfig) -> MarketplaceResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| MarketplaceError::system_error("build HTTP client", &e.to_string()))?;

        Ok(Self { client })
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> MarketplaceResult<T> {
        let operation = format!("fetch {resource}");
        log::debug!("🌐 GET {url} ({resource})");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| MarketplaceError::network_error(&operation, Some(url), None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(MarketplaceError::network_error(
                &operation,
                Some(url),
                Some(status.as_u16()),
                &format!("HTTP {status}: {error_text}"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MarketplaceError::network_error(&operation, Some(url), Some(status.as_u16()), &e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            MarketplaceError::parse_error(&format!("{resource} response"), Some(e.line()), &e.to_string())
        })
    }
}

#[async_trait]
impl CategorySource for ApiFetch {
    async fn fetch_categories(&self, url: &str) -> MarketplaceResult<Vec<String>> {
        self.fetch_json(url, CATEGORIES_RESOURCE).await
    }
}
