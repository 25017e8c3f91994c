pub mod api_fetch;
pub mod app_catalog;
pub mod category_facets;
pub mod facet_deriver;
pub mod feature_flags;
pub mod query_cache;
