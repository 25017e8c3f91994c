pub mod app_overview;
pub mod category_facet;
pub mod category_groups;
pub mod cli;
pub mod config;
pub mod query_options;
pub mod query_result;
