//! Quote and image providers
//!
//! Each provider performs one kind of external fetch: the quote provider
//! returns decoded quote text, the image provider a decoded raster. They are
//! independent capability contracts with no shared trait; the retry wrapper
//! in [`crate::retry`] is the only policy they have in common. Providers are
//! stateless per fetch and cheap to clone, so a single instance can serve
//! many concurrent orchestration calls.

pub mod image;
pub mod quote;

pub use self::image::{ImageProvider, ImageProviderBuilder};
pub use self::quote::{QuoteProvider, QuoteProviderBuilder};
