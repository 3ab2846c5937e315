//! Acquisition facade: concurrent quote + image fetch
//!
//! Runs the two provider fetches as independent tokio tasks and joins both
//! before returning. There is no race and no cancellation: a fast failure in
//! one branch never cuts the other short. The result is all-or-nothing —
//! either both payloads are present or a single error is returned, with the
//! quote branch's error taking priority when both fail.

use crate::config::{ImageConfig, QuoteConfig};
use crate::error::{Error, Result};
use crate::providers::{ImageProvider, QuoteProvider};
use image::DynamicImage;
use reqwest::Client;

/// Facade over the quote and image providers
///
/// Construct once and reuse: providers are stateless per fetch and the
/// underlying HTTP client pools connections across calls.
#[derive(Debug, Clone)]
pub struct Facade {
    quote: QuoteProvider,
    image: ImageProvider,
}

impl Facade {
    /// Create a facade with default providers sharing one HTTP client
    pub fn new() -> Self {
        let http = Client::new();
        Self {
            quote: QuoteProvider::builder(http.clone()).build(),
            image: ImageProvider::builder(http).build(),
        }
    }

    /// Create a facade from explicitly configured providers
    pub fn with_providers(quote: QuoteProvider, image: ImageProvider) -> Self {
        Self { quote, image }
    }

    /// Fetch a random quote and a random image concurrently.
    ///
    /// Both fetches always run to completion. If either branch fails after
    /// exhausting its retries, the whole call fails and any partial success
    /// is discarded; when both branches fail, the quote branch's error is
    /// the one reported.
    pub async fn fetch_quote_and_image(
        &self,
        quote_config: &QuoteConfig,
        image_config: &ImageConfig,
    ) -> Result<(String, DynamicImage)> {
        let quote_task = {
            let provider = self.quote.clone();
            let config = quote_config.clone();
            tokio::spawn(async move { provider.fetch(&config).await })
        };
        let image_task = {
            let provider = self.image.clone();
            let config = image_config.clone();
            tokio::spawn(async move { provider.fetch(&config).await })
        };

        // Full join: both tasks finish before either result is inspected.
        let (quote_result, image_result) = tokio::join!(quote_task, image_task);

        let quote = quote_result
            .map_err(|e| Error::TaskJoin(e.to_string()))?
            .map_err(|e| Error::QuoteApi(Box::new(e)))?;
        let image = image_result
            .map_err(|e| Error::TaskJoin(e.to_string()))?
            .map_err(|e| Error::ImageApi(Box::new(e)))?;

        Ok((quote, image))
    }
}

impl Default for Facade {
    fn default() -> Self {
        Self::new()
    }
}
