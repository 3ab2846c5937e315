//! Request configuration types and their builders
//!
//! Each fetch takes an immutable, pre-validated configuration built through a
//! chainable builder. Builders have no failure mode: out-of-range values are
//! clamped (with a warning where the caller should know about it) and unknown
//! image filters are kept structurally and dropped only at URL encode time.

use std::time::Duration;

/// Maximum accepted quote key; larger keys are clamped down to this value
pub const MAX_KEY_VALUE: i64 = 999_999;

/// Maximum accepted image width in pixels
pub const MAX_IMAGE_WIDTH: u32 = 1920;

/// Maximum accepted image height in pixels
pub const MAX_IMAGE_HEIGHT: u32 = 1080;

/// Image width used when the caller does not specify one
pub const DEFAULT_IMAGE_WIDTH: u32 = 200;

/// Image height used when the caller does not specify one
pub const DEFAULT_IMAGE_HEIGHT: u32 = 300;

/// Delay strategy applied between retry attempts
///
/// The providers ship with [`BackoffStrategy::Fixed`]: a constant delay
/// between attempts. `Exponential` doubles the base delay after each failed
/// attempt and is available for callers who want it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffStrategy {
    /// Wait the same base delay between every attempt
    #[default]
    Fixed,
    /// Double the base delay after each failed attempt
    Exponential,
}

/// Bounded-attempt retry policy for a provider's network call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one (always >= 1)
    pub max_attempts: u32,
    /// Base delay between attempts
    pub delay: Duration,
    /// How the delay evolves across attempts
    pub strategy: BackoffStrategy,
}

impl RetryPolicy {
    /// Create a fixed-delay policy. `max_attempts` is raised to 1 if 0 is passed.
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            strategy: BackoffStrategy::Fixed,
        }
    }

    /// Create an exponential policy starting from `delay`. `max_attempts` is
    /// raised to 1 if 0 is passed.
    pub fn exponential(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            strategy: BackoffStrategy::Exponential,
        }
    }

    /// Delay to wait after the given failed attempt (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.strategy {
            BackoffStrategy::Fixed => self.delay,
            BackoffStrategy::Exponential => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.delay.saturating_mul(factor)
            }
        }
    }
}

/// Immutable configuration for a single quote fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    key: i64,
}

impl QuoteConfig {
    /// The quote key; values <= 0 mean "no key filter"
    pub fn key(&self) -> i64 {
        self.key
    }
}

/// Chainable builder for [`QuoteConfig`]
///
/// Defaults to no key filter. Rebuilding without intervening calls yields
/// structurally equal configurations.
#[derive(Debug, Clone, Default)]
pub struct QuoteConfigBuilder {
    key: i64,
}

impl QuoteConfigBuilder {
    /// Create a builder with no key filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote key. Keys above [`MAX_KEY_VALUE`] are clamped down;
    /// zero or negative keys mean "no key filter".
    pub fn with_key(mut self, key: i64) -> Self {
        self.key = key.min(MAX_KEY_VALUE);
        self
    }

    /// Finalize the configuration
    pub fn build(&self) -> QuoteConfig {
        QuoteConfig { key: self.key }
    }
}

/// Immutable configuration for a single image fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    width: u32,
    height: u32,
    filters: Vec<String>,
}

impl ImageConfig {
    /// Requested image width in pixels, already clamped to `[1, MAX_IMAGE_WIDTH]`
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Requested image height in pixels, already clamped to `[1, MAX_IMAGE_HEIGHT]`
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Filter identifiers in insertion order, duplicates preserved
    pub fn filters(&self) -> &[String] {
        &self.filters
    }
}

/// Chainable builder for [`ImageConfig`]
#[derive(Debug, Clone)]
pub struct ImageConfigBuilder {
    width: u32,
    height: u32,
    filters: Vec<String>,
}

impl Default for ImageConfigBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            filters: Vec::new(),
        }
    }
}

impl ImageConfigBuilder {
    /// Create a builder with the default dimensions and no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image width, clamped to `[1, MAX_IMAGE_WIDTH]`
    pub fn with_width(mut self, width: u32) -> Self {
        if width > MAX_IMAGE_WIDTH {
            tracing::warn!(
                requested = width,
                max = MAX_IMAGE_WIDTH,
                "requested image width exceeds maximum allowed width"
            );
        }
        self.width = width.clamp(1, MAX_IMAGE_WIDTH);
        self
    }

    /// Set the image height, clamped to `[1, MAX_IMAGE_HEIGHT]`
    pub fn with_height(mut self, height: u32) -> Self {
        if height > MAX_IMAGE_HEIGHT {
            tracing::warn!(
                requested = height,
                max = MAX_IMAGE_HEIGHT,
                "requested image height exceeds maximum allowed height"
            );
        }
        self.height = height.clamp(1, MAX_IMAGE_HEIGHT);
        self
    }

    /// Append filter identifiers, preserving order and duplicates.
    /// Unrecognized identifiers are accepted here and silently dropped when
    /// the request URL is encoded.
    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
        self
    }

    /// Finalize the configuration
    pub fn build(&self) -> ImageConfig {
        ImageConfig {
            width: self.width,
            height: self.height,
            filters: self.filters.clone(),
        }
    }
}
