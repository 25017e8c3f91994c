use std::sync::Arc;
use std::time::Duration;

/// How a cached query behaves. `stale_time` of `None` means never stale.
#[derive(Debug, Clone)]
pub struct QueryOptions<T> {
    pub resource: String,
    pub placeholder_data: Option<Arc<T>>,
    pub stale_time: Option<Duration>,
    pub enabled: bool,
}

impl<T> QueryOptions<T> {
    pub fn new(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            placeholder_data: None,
            stale_time: None,
            enabled: true,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, data: Option<Arc<T>>) -> Self {
        self.placeholder_data = data;
        self
    }

    #[must_use]
    pub fn stale_time(mut self, stale_time: Option<Duration>) -> Self {
        self.stale_time = stale_time;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
