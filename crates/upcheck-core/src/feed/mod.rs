//! Feed-based release resolver: the upstream publishes a property list of
//! release records, one per release channel.
//!
//! Selection is last-write-wins per channel (see [`select_channel`]).

mod parse;
mod resolve;
mod select;

pub use parse::{parse_feed, ReleaseFeed, ReleaseRecord};
pub use resolve::{FeedReleaseResolver, FeedSource, DEFAULT_CHANNEL};
pub use select::select_channel;
