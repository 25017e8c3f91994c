//! Category facets for a marketplace filter: a cached remote category list,
//! an experiment flag and the apps on screen turn into `{name, count}` pairs.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
