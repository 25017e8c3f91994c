use std::sync::Arc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub name: String,
    pub count: usize,
}

impl CategoryFacet {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self { name: name.into(), count }
    }
}

/// What the rendering layer receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFacets {
    pub is_placeholder_data: bool,
    pub data: Arc<Vec<CategoryFacet>>,
}
