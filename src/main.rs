//! uplink - chat backend for the portfolio site
//!
//! Answers widget queries from a static keyword cache first, then from the
//! configured LLM providers (Gemini, then OpenAI), then with a fixed
//! offline message.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use uplink::api::{self, AppState};
use uplink::chat::ChatMessage;
use uplink::config::{config_dir, UplinkConfig};
use uplink::knowledge::OfflineResponder;
use uplink::resolver::QueryResolver;

#[derive(Parser)]
#[command(name = "uplink")]
#[command(about = "Tiered chat backend: static cache, LLM providers, offline fallback")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Bind host (overrides UPLINK_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides UPLINK_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Resolve a single query and print the reply
    Ask {
        query: String,

        /// Answer from the local knowledge table only
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (from ~/.uplink/.env or current dir)
    let env_path = Some(config_dir().join(".env")).filter(|p| p.exists());
    if let Some(path) = env_path {
        let _ = dotenvy::from_path(&path);
    } else {
        let _ = dotenvy::dotenv();
    }

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("uplink=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = UplinkConfig::from_env();

    match args.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Command::Ask { query, offline } => ask(config, query, offline).await,
    }
}

async fn serve(config: UplinkConfig) -> Result<()> {
    let resolver = QueryResolver::from_config(&config)?;

    info!("Starting uplink {}", env!("CARGO_PKG_VERSION"));
    for provider in resolver.chain().providers() {
        info!(
            provider = provider.name(),
            available = provider.is_available(),
            "provider tier"
        );
    }

    let state = Arc::new(AppState::new(resolver));
    let app = api::router(state, &config.cors_origin)?;

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn ask(config: UplinkConfig, query: String, offline: bool) -> Result<()> {
    if offline {
        println!("{}", OfflineResponder::new()?.respond(&query));
        return Ok(());
    }

    let resolver = QueryResolver::from_config(&config)?;
    let result = resolver.resolve(&[ChatMessage::user(query)]).await;

    println!("{}", result.content);
    eprintln!("[source: {}]", result.source);
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down");
}
