//! Web application: serve the random quote-and-image page over HTTP.

use clap::Parser;
use quotesnap::{Facade, web};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Serve a web page showing a fresh random quote and image per request
#[derive(Debug, Parser)]
#[command(name = "webapp", version)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> quotesnap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let facade = Arc::new(Facade::new());

    web::serve(facade, args.port).await
}
