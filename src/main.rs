use std::sync::Arc;

use clap::Parser;

use formgate::config::AppConfig;
use formgate::server;
use formgate::state::AppState;
use formgate::store::MemoryStore;

#[derive(Parser)]
#[command(name = "formgate", about = "Token-gated form intake API")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "FORMGATE_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up AUTH_USERNAME, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = AppConfig::from_env()?;
    let state = AppState::new(config, Arc::new(MemoryStore::new()));

    server::serve(state, args.port).await
}
