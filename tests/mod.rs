mod common;
mod config_loading;
mod http_source;
