pub mod commands;
pub mod output_format;
pub mod query_status;
