//! Chatbot Message Service Server

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use chatbot_server::config::{DEFAULT_BIND_ADDR, DEFAULT_PATH_PREFIX};
use chatbot_server::{create_router, AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "chatbot-server")]
#[command(about = "Chatbot message service")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "CHATBOT_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind_addr: String,

    /// Route prefix for the message endpoint
    #[arg(long, env = "CHATBOT_PATH_PREFIX", default_value = DEFAULT_PATH_PREFIX)]
    path_prefix: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatbot_server=debug,tower_http=debug".into()),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        bind_addr: args.bind_addr,
        path_prefix: args.path_prefix,
    };
    let http_addr: SocketAddr = config.bind_addr.parse()?;

    let router = create_router(AppState::new(), &config);

    let listener = TcpListener::bind(http_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        prefix = %config.normalized_prefix(),
        "HTTP server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
