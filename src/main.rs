use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use herald::app::AppContext;
use herald::cli::{commands, Cli, Commands};
use herald::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Check { dry_run } => {
            commands::check(&ctx, dry_run).await?;
        }
        Commands::Login => {
            commands::login(&ctx).await?;
        }
        Commands::List { json } => {
            commands::list(&ctx, json).await?;
        }
        Commands::Feed { json } => {
            commands::feed(&ctx, json).await?;
        }
    }

    Ok(())
}
