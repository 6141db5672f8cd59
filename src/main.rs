//! Chat Shell
//!
//! Entry point: serves the shell, or runs a single backend call from the CLI.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chat_shell::client::Client;
use chat_shell::config::{AppConfig, Cli, Command};
use chat_shell::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = Arc::new(AppConfig::from_cli(&cli)?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_server(config).await?,
        Command::Chats => {
            let client = Client::from_config(&config.backend)?;
            let chats = client.fetch_chat_list().await?;
            println!("{}", serde_json::to_string_pretty(&chats)?);
        }
        Command::Prompt { message } => {
            let client = Client::from_config(&config.backend)?;
            let response = client.prompt(message).await?;
            println!("{}", response.answer);
        }
    }

    Ok(())
}
