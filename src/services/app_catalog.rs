use std::io::Read;
use std::path::Path;
use crate::errors::{MarketplaceError, MarketplaceResult, ResultExt};
use crate::structs::app_overview::AppOverview;

pub struct AppCatalog;

impl AppCatalog {
    /// Reads a JSON array of app overviews from `path`, or stdin for "-".
    pub fn load(path: &Path) -> MarketplaceResult<Vec<AppOverview>> {
        let content = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .with_operation("read apps from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(path).with_operation(&format!("read apps from {}", path.display()))?
        };

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> MarketplaceResult<Vec<AppOverview>> {
        let apps: Vec<AppOverview> = serde_json::from_str(content).map_err(|e| {
            MarketplaceError::parse_error("apps JSON", Some(e.line()), &e.to_string())
        })?;
        log::debug!("📦 Loaded {} apps", apps.len());
        Ok(apps)
    }
}
