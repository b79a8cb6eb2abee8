//! Retrieval of update-check resources.
//!
//! Resolvers only see the [`Fetcher`] trait; [`CurlFetcher`] is the libcurl
//! implementation used by the catalog and the CLI.

mod http;

pub use http::{CurlFetcher, FetchOptions};

use crate::error::FetchError;

/// Capability to GET a URL and return its body.
pub trait Fetcher {
    /// Fetches the raw response body.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Fetches the body and decodes it as UTF-8.
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let bytes = self.fetch_bytes(url)?;
        String::from_utf8(bytes).map_err(|source| FetchError::Encoding {
            url: url.to_string(),
            source,
        })
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch_bytes(url)
    }
}
