//! Terminal application: fetch a random quote and image and print them as
//! text plus an ANSI truecolor frame.

use clap::Parser;
use quotesnap::config::{ImageConfigBuilder, QuoteConfigBuilder};
use quotesnap::{Facade, render};
use tracing_subscriber::EnvFilter;

/// Default terminal canvas width in cells
const DEFAULT_TERMINAL_WIDTH: u32 = 40;

/// Default terminal canvas height in cells
const DEFAULT_TERMINAL_HEIGHT: u32 = 30;

/// Fetch a random quote and image and render them in the terminal
#[derive(Debug, Parser)]
#[command(name = "terminal", version)]
struct Args {
    /// Quote category key (0 means no key filter)
    #[arg(long, default_value_t = 0)]
    category: i64,

    /// Image width in terminal cells
    #[arg(long, default_value_t = DEFAULT_TERMINAL_WIDTH)]
    width: u32,

    /// Image height in terminal cells
    #[arg(long, default_value_t = DEFAULT_TERMINAL_HEIGHT)]
    height: u32,

    /// Comma-separated image filters: grayscale, blur
    #[arg(long)]
    filters: Option<String>,
}

#[tokio::main]
async fn main() -> quotesnap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.width > DEFAULT_TERMINAL_WIDTH || args.height > DEFAULT_TERMINAL_HEIGHT {
        tracing::warn!(
            width = args.width,
            height = args.height,
            "requested image size exceeds the default terminal canvas"
        );
    }

    let quote_config = QuoteConfigBuilder::new().with_key(args.category).build();
    let mut image_builder = ImageConfigBuilder::new()
        .with_width(args.width)
        .with_height(args.height);
    if let Some(filters) = &args.filters {
        image_builder = image_builder.with_filters(
            filters
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty()),
        );
    }
    let image_config = image_builder.build();

    tracing::info!("fetching random quote and image");
    let facade = Facade::new();
    let (quote, raster) = facade
        .fetch_quote_and_image(&quote_config, &image_config)
        .await?;

    println!("{quote}");
    print!("{}", render::ascii_frame(&raster, args.width, args.height));

    Ok(())
}
