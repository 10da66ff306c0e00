use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use qaym::cli::Client;

/// Interactive explorer for the Qaym restaurant directory API
#[derive(Parser, Debug)]
#[command(name = "qaym", version, about)]
struct Args {
    /// API key appended to every request
    #[arg(short, long, default_value = "")]
    key: String,

    /// Override the API base URL
    #[arg(long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut client = Client::new(args.key)?;
    if let Some(server) = args.server {
        client = client.with_server_url(server);
    }
    client.run()?;

    Ok(())
}
