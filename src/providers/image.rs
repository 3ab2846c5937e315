//! Random image provider
//!
//! Fetches a random JPEG from a picsum-style HTTP API and decodes it into an
//! in-memory raster. Width and height are embedded as path segments; the
//! recognized filters are appended as a bare query string in the order they
//! were supplied, and anything unrecognized is dropped at encode time.

use crate::config::{ImageConfig, RetryPolicy};
use crate::error::{Error, Result};
use crate::retry;
use image::DynamicImage;
use reqwest::Client;
use std::time::Duration;

/// Default base URL for the image API
pub const DEFAULT_BASE_URL: &str = "https://picsum.photos";

/// Grayscale filter identifier recognized by the image API
pub const FILTER_GRAYSCALE: &str = "grayscale";

/// Blur filter identifier recognized by the image API
pub const FILTER_BLUR: &str = "blur";

/// Attempts the image fetch is given before giving up
pub const RETRY_ATTEMPTS: u32 = 3;

/// Fixed delay between image fetch attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Provider that fetches and decodes random images over HTTP
#[derive(Debug, Clone)]
pub struct ImageProvider {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

/// Builder for [`ImageProvider`]
#[derive(Debug, Clone)]
pub struct ImageProviderBuilder {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ImageProviderBuilder {
    /// Create a builder with the default base URL, using the given HTTP
    /// client for all requests
    pub fn new(http: Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::fixed(RETRY_ATTEMPTS, RETRY_DELAY),
        }
    }

    /// Set the base URL of the image API
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the retry policy applied to each fetch
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Finalize the provider
    pub fn build(self) -> ImageProvider {
        ImageProvider {
            http: self.http,
            base_url: self.base_url,
            retry: self.retry,
        }
    }
}

impl ImageProvider {
    /// Start building a provider around the given HTTP client
    pub fn builder(http: Client) -> ImageProviderBuilder {
        ImageProviderBuilder::new(http)
    }

    /// Fetch a random image using the provided configuration and decode it
    /// into a raster.
    ///
    /// The underlying call is retried per the provider's [`RetryPolicy`];
    /// any transport, status, or decode failure counts against the bound.
    pub async fn fetch(&self, config: &ImageConfig) -> Result<DynamicImage> {
        let url = self.request_url(config);
        retry::run(&self.retry, "image fetch", || self.fetch_once(&url)).await
    }

    async fn fetch_once(&self, url: &str) -> Result<DynamicImage> {
        let response = self.http.get(url).send().await.inspect_err(|e| {
            tracing::error!(error = %e, "image request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(code = status.as_u16(), "image api returned non-success status");
            return Err(Error::Status {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let raster = image::load_from_memory_with_format(&body, image::ImageFormat::Jpeg)
            .inspect_err(|e| {
                tracing::error!(error = %e, "failed to decode image response body");
            })?;

        Ok(raster)
    }

    /// Build the request URL: dimensions as path segments, recognized
    /// filters as a bare `&`-joined query string in supplied order
    fn request_url(&self, config: &ImageConfig) -> String {
        let mut url = format!(
            "{}/{}/{}.jpg",
            self.base_url.trim_end_matches('/'),
            config.width(),
            config.height()
        );

        let filters: Vec<&str> = config
            .filters()
            .iter()
            .map(String::as_str)
            .filter(|f| *f == FILTER_GRAYSCALE || *f == FILTER_BLUR)
            .collect();
        if !filters.is_empty() {
            url.push('?');
            url.push_str(&filters.join("&"));
        }

        url
    }
}
