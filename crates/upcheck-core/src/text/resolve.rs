//! Fetch a version string and build the download from templates.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::fetch::Fetcher;
use crate::resolver::{ResolvedRelease, Resolver};
use crate::template;
use crate::version::pad_version;

/// Where the version lives and how to turn it into a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSource {
    /// URL of the plain-text file holding the current version.
    pub update_url: String,
    /// Filename template; `{version}` is replaced by the padded version.
    pub filename_template: String,
    /// Download URL template; `{filename}` is replaced by the filename.
    pub download_template: String,
}

/// Resolver for upstreams that publish only a version number.
#[derive(Debug, Clone)]
pub struct TextVersionResolver<F> {
    source: TextSource,
    fetcher: F,
}

impl<F: Fetcher> TextVersionResolver<F> {
    pub fn new(source: TextSource, fetcher: F) -> Self {
        Self { source, fetcher }
    }

    pub fn source(&self) -> &TextSource {
        &self.source
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: Fetcher> Resolver for TextVersionResolver<F> {
    fn resolve(&self) -> Result<ResolvedRelease, ResolveError> {
        tracing::debug!("fetching version text from {}", self.source.update_url);
        let raw = self.fetcher.fetch_text(&self.source.update_url)?;

        let version = pad_version(raw.trim())?;
        tracing::info!("Found version {}", version);

        let filename = template::render(&self.source.filename_template, "version", &version)?;
        tracing::info!("Found download filename {}", filename);

        let url = template::render(&self.source.download_template, "filename", &filename)?;
        tracing::info!("Found URL {}", url);

        ResolvedRelease::new(version, filename, url)
    }
}
