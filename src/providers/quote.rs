//! Random quote provider
//!
//! Fetches a random quote from a forismatic-style HTTP API. The request URL
//! carries the provider's fixed `method`/`format`/`lang` parameters plus the
//! per-request key (only when positive), encoded in alphabetical order so the
//! URL is deterministic for a given configuration.

use crate::config::{QuoteConfig, RetryPolicy};
use crate::error::{Error, Result};
use crate::retry;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Default base URL for the quote API
pub const DEFAULT_BASE_URL: &str = "http://api.forismatic.com/api/1.0/";

const DEFAULT_METHOD: &str = "getQuote";
const DEFAULT_FORMAT: &str = "json";
const DEFAULT_LANGUAGE: &str = "en";

/// Attempts the quote fetch is given before giving up
pub const RETRY_ATTEMPTS: u32 = 4;

/// Fixed delay between quote fetch attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Structure of the JSON response body containing a quote
#[derive(Debug, Deserialize)]
struct QuoteBody {
    #[serde(rename = "quoteText")]
    quote_text: String,
}

/// Provider that fetches random quote text over HTTP
///
/// Holds only fixed connection parameters; a fetch never mutates it, so one
/// instance (or a cheap clone) can serve many concurrent fetches.
#[derive(Debug, Clone)]
pub struct QuoteProvider {
    http: Client,
    base_url: String,
    method: String,
    format: String,
    language: String,
    retry: RetryPolicy,
}

/// Builder for [`QuoteProvider`]
#[derive(Debug, Clone)]
pub struct QuoteProviderBuilder {
    http: Client,
    base_url: String,
    method: String,
    format: String,
    language: String,
    retry: RetryPolicy,
}

impl QuoteProviderBuilder {
    /// Create a builder with the default API parameters, using the given
    /// HTTP client for all requests
    pub fn new(http: Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            method: DEFAULT_METHOD.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            retry: RetryPolicy::fixed(RETRY_ATTEMPTS, RETRY_DELAY),
        }
    }

    /// Set the base URL of the quote API
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API method query parameter
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the response format query parameter
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the quote language query parameter
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Override the retry policy applied to each fetch
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Finalize the provider
    pub fn build(self) -> QuoteProvider {
        QuoteProvider {
            http: self.http,
            base_url: self.base_url,
            method: self.method,
            format: self.format,
            language: self.language,
            retry: self.retry,
        }
    }
}

impl QuoteProvider {
    /// Start building a provider around the given HTTP client
    pub fn builder(http: Client) -> QuoteProviderBuilder {
        QuoteProviderBuilder::new(http)
    }

    /// Fetch a random quote using the provided configuration.
    ///
    /// The underlying call is retried per the provider's [`RetryPolicy`];
    /// any transport, status, or decode failure counts against the bound.
    pub async fn fetch(&self, config: &QuoteConfig) -> Result<String> {
        let url = self.request_url(config)?;
        retry::run(&self.retry, "quote fetch", || self.fetch_once(&url)).await
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await.inspect_err(|e| {
            tracing::error!(error = %e, "quote request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(code = status.as_u16(), "quote api returned non-success status");
            return Err(Error::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: QuoteBody = serde_json::from_str(&body).inspect_err(|e| {
            tracing::error!(error = %e, "failed to decode quote response body");
        })?;

        Ok(data.quote_text)
    }

    /// Build the request URL for the given configuration, query parameters
    /// in alphabetical order
    fn request_url(&self, config: &QuoteConfig) -> Result<String> {
        let mut url = Url::parse(&self.base_url)?;

        let mut params: Vec<(&str, String)> = vec![
            ("format", self.format.clone()),
            ("lang", self.language.clone()),
            ("method", self.method.clone()),
        ];
        if config.key() > 0 {
            params.push(("key", config.key().to_string()));
        }
        params.sort_by(|a, b| a.0.cmp(b.0));

        url.query_pairs_mut().extend_pairs(params);
        Ok(url.into())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuoteConfigBuilder;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_provider(base_url: &str, max_attempts: u32) -> QuoteProvider {
        QuoteProvider::builder(Client::new())
            .with_base_url(base_url)
            .with_retry_policy(RetryPolicy::fixed(max_attempts, Duration::from_millis(10)))
            .build()
    }

    #[test]
    fn request_url_sorts_query_parameters_alphabetically() {
        let provider = QuoteProvider::builder(Client::new()).build();
        let config = QuoteConfigBuilder::new().with_key(100).build();

        let url = provider.request_url(&config).unwrap();
        assert_eq!(
            url,
            "http://api.forismatic.com/api/1.0/?format=json&key=100&lang=en&method=getQuote"
        );
    }

    #[test]
    fn request_url_omits_key_when_not_positive() {
        let provider = QuoteProvider::builder(Client::new()).build();

        let no_key = QuoteConfigBuilder::new().build();
        let url = provider.request_url(&no_key).unwrap();
        assert_eq!(
            url,
            "http://api.forismatic.com/api/1.0/?format=json&lang=en&method=getQuote"
        );

        let negative = QuoteConfigBuilder::new().with_key(-3).build();
        assert_eq!(provider.request_url(&negative).unwrap(), url);
    }

    #[test]
    fn request_url_reflects_builder_overrides() {
        let provider = QuoteProvider::builder(Client::new())
            .with_base_url("http://quotes.test/api/")
            .with_method("getRandom")
            .with_format("xml")
            .with_language("ru")
            .build();
        let config = QuoteConfigBuilder::new().build();

        let url = provider.request_url(&config).unwrap();
        assert_eq!(
            url,
            "http://quotes.test/api/?format=xml&lang=ru&method=getRandom"
        );
    }

    #[tokio::test]
    async fn fetch_returns_decoded_quote_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("method", "getQuote"))
            .and(query_param("format", "json"))
            .and(query_param("lang", "en"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "quoteText": "Stay hungry." })),
            )
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri(), 2);
        let quote = provider
            .fetch(&QuoteConfigBuilder::new().build())
            .await
            .unwrap();

        assert_eq!(quote, "Stay hungry.");
    }

    #[tokio::test]
    async fn non_success_status_is_retried_until_exhaustion() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri(), 3);
        let err = provider
            .fetch(&QuoteConfigBuilder::new().build())
            .await
            .unwrap_err();

        match err {
            Error::RetryExhausted {
                operation,
                attempts,
                source,
            } => {
                assert_eq!(operation, "quote fetch");
                assert_eq!(attempts, 3);
                assert!(matches!(*source, Error::Status { code: 500 }));
            }
            other => panic!("expected RetryExhausted, got {other:?}"),
        }
        server.verify().await;
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure_after_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(2)
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri(), 2);
        let err = provider
            .fetch(&QuoteConfigBuilder::new().build())
            .await
            .unwrap_err();

        match err {
            Error::RetryExhausted { source, .. } => {
                assert!(matches!(*source, Error::Json(_)));
            }
            other => panic!("expected RetryExhausted, got {other:?}"),
        }
        server.verify().await;
    }
}
