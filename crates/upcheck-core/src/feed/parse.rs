//! Property-list release feed structures.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One entry of the feed. All three fields are required; a record missing
/// any of them fails the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Release-channel identifier (e.g. "stable").
    #[serde(rename = "ReleaseLifecycle")]
    pub channel: String,
    #[serde(rename = "DownloadURL")]
    pub download_url: String,
    #[serde(rename = "BundleShortVersionString")]
    pub short_version: String,
}

/// Records in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseFeed {
    records: Vec<ReleaseRecord>,
}

impl ReleaseFeed {
    pub fn new(records: Vec<ReleaseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ReleaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decodes an XML or binary property list whose root is an array of records.
pub fn parse_feed(bytes: &[u8]) -> Result<ReleaseFeed, ParseError> {
    let feed: ReleaseFeed = plist::from_bytes(bytes)?;
    tracing::debug!("parsed release feed with {} records", feed.len());
    Ok(feed)
}
