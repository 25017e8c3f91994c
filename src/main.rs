use clap::Parser;
use marketplace_facets::errors::ErrorHandler;
use marketplace_facets::structs::cli::Cli;
use marketplace_facets::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(error) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        return Err(error.into());
    }

    Ok(())
}
