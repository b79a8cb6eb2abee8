//! Plain-text version resolver: the upstream publishes a bare version number
//! and the download location is synthesized from templates.

mod resolve;

pub use resolve::{TextSource, TextVersionResolver};
