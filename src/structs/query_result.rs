use std::sync::Arc;
use chrono::{DateTime, Utc};
use crate::enums::query_status::QueryStatus;
use crate::errors::MarketplaceError;

/// A snapshot of a cached query at the moment it was observed.
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    pub status: QueryStatus,
    pub data: Option<Arc<T>>,
    pub is_placeholder_data: bool,
    pub error: Option<MarketplaceError>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> QueryResult<T> {
    pub const fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            is_placeholder_data: false,
            error: None,
            updated_at: None,
        }
    }

    pub fn pending(placeholder: Option<Arc<T>>) -> Self {
        Self {
            status: QueryStatus::Pending,
            is_placeholder_data: placeholder.is_some(),
            data: placeholder,
            error: None,
            updated_at: None,
        }
    }

    pub const fn success(data: Arc<T>, updated_at: DateTime<Utc>) -> Self {
        Self {
            status: QueryStatus::Success,
            data: Some(data),
            is_placeholder_data: false,
            error: None,
            updated_at: Some(updated_at),
        }
    }

    pub const fn failure(error: MarketplaceError) -> Self {
        Self {
            status: QueryStatus::Error,
            data: None,
            is_placeholder_data: false,
            error: Some(error),
            updated_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == QueryStatus::Pending
    }
}
