//! Release-channel selection.

use std::collections::BTreeMap;

use super::parse::{ReleaseFeed, ReleaseRecord};
use crate::error::ResolveError;

/// Picks the record for `channel`.
///
/// Records are indexed by channel in document order, so when several records
/// share a channel the last one wins.
pub fn select_channel<'a>(
    feed: &'a ReleaseFeed,
    channel: &str,
) -> Result<&'a ReleaseRecord, ResolveError> {
    let mut by_channel: BTreeMap<&str, &ReleaseRecord> = BTreeMap::new();
    for record in feed.records() {
        by_channel.insert(record.channel.as_str(), record);
    }

    by_channel
        .get(channel)
        .copied()
        .ok_or_else(|| ResolveError::Selection {
            channel: channel.to_string(),
            available: by_channel.keys().map(|c| c.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(channel: &str, url: &str, version: &str) -> ReleaseRecord {
        ReleaseRecord {
            channel: channel.to_string(),
            download_url: url.to_string(),
            short_version: version.to_string(),
        }
    }

    #[test]
    fn last_record_for_channel_wins() {
        let feed = ReleaseFeed::new(vec![
            record("stable", "http://x/a-1.0.dmg", "1.0"),
            record("beta", "http://x/a-2.1b1.dmg", "2.1b1"),
            record("stable", "http://x/a-2.0.dmg", "2.0"),
        ]);
        let chosen = select_channel(&feed, "stable").unwrap();
        assert_eq!(chosen.short_version, "2.0");
        assert_eq!(select_channel(&feed, "beta").unwrap().short_version, "2.1b1");
    }

    #[test]
    fn missing_channel_is_selection_error() {
        let feed = ReleaseFeed::new(vec![
            record("stable", "http://x/a.dmg", "1.0"),
            record("beta", "http://x/b.dmg", "1.1b1"),
        ]);
        match select_channel(&feed, "nightly") {
            Err(ResolveError::Selection { channel, available }) => {
                assert_eq!(channel, "nightly");
                assert_eq!(available, vec!["beta", "stable"]);
            }
            other => panic!("expected Selection, got {:?}", other),
        }
    }

    #[test]
    fn empty_feed_has_no_channels() {
        let feed = ReleaseFeed::default();
        assert!(matches!(
            select_channel(&feed, "stable"),
            Err(ResolveError::Selection { ref available, .. }) if available.is_empty()
        ));
    }
}
