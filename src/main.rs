use anyhow::Result;
use bookshelf::application::serve;
use bookshelf::infrastructure::client::BookshelfClient;
use bookshelf::presentation::cli::{Cli, Commands, details, isbn, search};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => serve(cmd.server_config()).await,
        Commands::Search(cmd) => {
            let client = BookshelfClient::from_base_url(&cli.api_url)?;
            search::run(&client, cmd).await
        }
        Commands::Isbn(cmd) => {
            let client = BookshelfClient::from_base_url(&cli.api_url)?;
            isbn::run(&client, cmd).await
        }
        Commands::Details(cmd) => {
            let client = BookshelfClient::from_base_url(&cli.api_url)?;
            details::run(&client, cmd).await
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
