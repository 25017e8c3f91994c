use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "marketplace-facets")]
#[clap(about = "Marketplace category facets from app overviews", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
