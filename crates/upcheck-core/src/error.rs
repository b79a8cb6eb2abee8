//! Error taxonomy for a single resolve operation.
//!
//! Every failure aborts the resolve; nothing here is recovered locally.

use thiserror::Error;

/// Failure retrieving the remote update-check resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl reported a transport failure (DNS, connect, timeout, TLS).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// The body was requested as text but is not valid UTF-8.
    #[error("response from {url} is not valid UTF-8")]
    Encoding {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Failure decoding a release feed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bytes are not a property list, or a record lacks a required field.
    #[error("malformed release feed: {0}")]
    Plist(#[from] plist::Error),
}

/// Error returned by [`crate::Resolver::resolve`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No record in the feed carries the requested release channel.
    #[error("no release for channel {channel:?} (feed has: {})", .available.join(", "))]
    Selection {
        channel: String,
        available: Vec<String>,
    },

    /// An upstream value cannot be turned into a usable release field.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
