use clap::Parser;

use formgate::client;

#[derive(Parser)]
#[command(name = "formgate-web", about = "Cookie-gated web views for formgate")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "FORMGATE_WEB_PORT", default_value_t = 5173)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    client::serve(args.port).await
}
