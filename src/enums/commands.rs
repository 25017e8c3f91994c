use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        path: Option<PathBuf>,
    },
    /// Check the configuration for mistakes
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Print category facets for a list of apps
    Categories {
        /// JSON array of app overviews, or "-" for stdin
        #[clap(short, long)]
        apps: PathBuf,
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Treat the app list as placeholder data
        #[clap(long)]
        placeholder: bool,
        /// Override a flag, e.g. marketplace_exp=true
        #[clap(long = "flag", value_name = "NAME=BOOL")]
        flags: Vec<String>,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Print the first render without waiting for remote categories
        #[clap(long)]
        no_wait: bool,
    },
}
