//! # quotesnap
//!
//! Fetches a random quote and a random image from two unrelated HTTP
//! services, concurrently, and hands the pair to a presentation surface:
//! an ANSI truecolor terminal frame or a self-contained HTML page.
//!
//! The core of the crate is the acquisition pipeline: validating config
//! builders, the two providers, a fixed-delay retry wrapper around each
//! network call, and a facade that fans out to both providers and joins
//! their results into a single all-or-nothing outcome.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quotesnap::{Facade, ImageConfigBuilder, QuoteConfigBuilder};
//!
//! #[tokio::main]
//! async fn main() -> quotesnap::Result<()> {
//!     let facade = Facade::new();
//!     let quote_config = QuoteConfigBuilder::new().with_key(100).build();
//!     let image_config = ImageConfigBuilder::new()
//!         .with_width(400)
//!         .with_height(600)
//!         .with_filters(["grayscale"])
//!         .build();
//!
//!     let (quote, image) = facade
//!         .fetch_quote_and_image(&quote_config, &image_config)
//!         .await?;
//!     println!("{quote} ({}x{} image)", image.width(), image.height());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Request configuration types and builders
pub mod config;
/// Error types
pub mod error;
/// Concurrent quote + image acquisition facade
pub mod facade;
/// Quote and image providers
pub mod providers;
/// Terminal and HTML renderers
pub mod render;
/// Retry wrapper with bounded attempts and fixed delay
pub mod retry;
/// Web presentation surface (axum)
pub mod web;

// Re-export commonly used types
pub use config::{
    BackoffStrategy, ImageConfig, ImageConfigBuilder, QuoteConfig, QuoteConfigBuilder,
    RetryPolicy,
};
pub use error::{Error, Result};
pub use facade::Facade;
pub use providers::{ImageProvider, ImageProviderBuilder, QuoteProvider, QuoteProviderBuilder};
