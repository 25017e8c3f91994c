pub mod facet_logger;
pub mod fetch_spinner;
