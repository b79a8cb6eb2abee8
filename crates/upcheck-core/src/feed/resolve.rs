//! Fetch a release feed and resolve one channel to a download.

use serde::{Deserialize, Serialize};

use super::parse::parse_feed;
use super::select::select_channel;
use crate::error::ResolveError;
use crate::fetch::Fetcher;
use crate::resolver::{ResolvedRelease, Resolver};
use crate::url_model::filename_from_url;

/// Channel used when none is configured.
pub const DEFAULT_CHANNEL: &str = "stable";

/// Feed location and the channel to resolve by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub feed_url: String,
    #[serde(default = "default_channel")]
    pub channel: String,
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

/// Resolver for upstreams that publish a property-list feed of releases.
///
/// The version is taken verbatim from the record; unlike the plain-text
/// variant it is not padded.
#[derive(Debug, Clone)]
pub struct FeedReleaseResolver<F> {
    source: FeedSource,
    fetcher: F,
}

impl<F: Fetcher> FeedReleaseResolver<F> {
    pub fn new(source: FeedSource, fetcher: F) -> Self {
        Self { source, fetcher }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolves `channel` instead of the configured default.
    pub fn resolve_channel(&self, channel: &str) -> Result<ResolvedRelease, ResolveError> {
        tracing::info!("Fetching update feed data from URL {}", self.source.feed_url);
        let bytes = self.fetcher.fetch_bytes(&self.source.feed_url)?;
        let feed = parse_feed(&bytes)?;

        let record = select_channel(&feed, channel)?;
        tracing::info!("Found update feed data for channel {}", channel);

        let url = record.download_url.clone();
        tracing::info!("Found URL {}", url);

        let version = record.short_version.clone();
        tracing::info!("Found version {}", version);

        let filename = filename_from_url(&url).to_string();
        if filename.is_empty() {
            return Err(ResolveError::MalformedInput(format!(
                "download URL {:?} has no filename segment",
                url
            )));
        }
        tracing::info!("Found download filename {}", filename);

        ResolvedRelease::new(version, filename, url)
    }
}

impl<F: Fetcher> Resolver for FeedReleaseResolver<F> {
    fn resolve(&self) -> Result<ResolvedRelease, ResolveError> {
        self.resolve_channel(&self.source.channel)
    }
}
