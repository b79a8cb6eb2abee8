//! Named providers: the concrete update checks this crate ships.
//!
//! Each provider pairs one resolver variant with its upstream endpoints and
//! the descriptions of the variables it emits.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::feed::{FeedReleaseResolver, FeedSource, DEFAULT_CHANNEL};
use crate::fetch::Fetcher;
use crate::resolver::{ResolvedRelease, Resolver};
use crate::text::{TextSource, TextVersionResolver};
use crate::url_model::validate_endpoint;

pub const XRG_UPDATE_URL: &str = "http://download.gauchosoft.com/xrg/latest_version.txt";
pub const XRG_FILENAME_TEMPLATE: &str = "XRG-release-{version}.zip";
pub const XRG_DOWNLOAD_TEMPLATE: &str = "http://download.gauchosoft.com/xrg/{filename}";

pub const LAUNCHBAR5_FEED_URL: &str = "https://sw-update.obdev.at/update-feeds/launchbar-5.plist";

/// Which resolver a provider uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Text,
    Feed,
}

/// A variable the provider writes into the environment.
#[derive(Debug, Clone, Copy)]
pub struct OutputVariable {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub variant: Variant,
    pub description: &'static str,
    pub outputs: &'static [OutputVariable],
}

pub const PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        name: "xrg",
        variant: Variant::Text,
        description: "Provides URL to the latest XRG download.",
        outputs: &[
            OutputVariable {
                name: "version",
                description: "Version of the XRG download.",
            },
            OutputVariable {
                name: "filename",
                description: "Filename of the latest XRG release download.",
            },
            OutputVariable {
                name: "url",
                description: "URL to the latest XRG release download.",
            },
        ],
    },
    ProviderInfo {
        name: "launchbar5",
        variant: Variant::Feed,
        description: "Provides URL to the latest LaunchBar 5 download.",
        outputs: &[
            OutputVariable {
                name: "version",
                description: "Version of the LaunchBar download.",
            },
            OutputVariable {
                name: "filename",
                description: "Filename of the latest LaunchBar release download.",
            },
            OutputVariable {
                name: "url",
                description: "URL to the latest LaunchBar release download.",
            },
        ],
    },
];

/// Finds a provider by name.
pub fn lookup(name: &str) -> Result<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.name == name).with_context(|| {
        let known: Vec<&str> = PROVIDERS.iter().map(|p| p.name).collect();
        format!("unknown provider {:?} (known: {})", name, known.join(", "))
    })
}

/// Per-provider endpoints (`[providers.*]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub xrg: TextSource,
    pub launchbar5: FeedSource,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            xrg: TextSource {
                update_url: XRG_UPDATE_URL.to_string(),
                filename_template: XRG_FILENAME_TEMPLATE.to_string(),
                download_template: XRG_DOWNLOAD_TEMPLATE.to_string(),
            },
            launchbar5: FeedSource {
                feed_url: LAUNCHBAR5_FEED_URL.to_string(),
                channel: DEFAULT_CHANNEL.to_string(),
            },
        }
    }
}

/// A configured resolver for one catalog entry.
#[derive(Debug, Clone)]
pub enum Provider<F> {
    Text(TextVersionResolver<F>),
    Feed(FeedReleaseResolver<F>),
}

impl<F: Fetcher> Provider<F> {
    /// Builds the named provider from `config`, validating its endpoints.
    ///
    /// The catalog has one provider per variant, so the variant picks the
    /// `[providers.*]` section.
    pub fn build(name: &str, config: &ProvidersConfig, fetcher: F) -> Result<Self> {
        let info = lookup(name)?;
        let provider = match info.variant {
            Variant::Text => {
                validate_endpoint(&config.xrg.update_url).context("providers.xrg.update_url")?;
                Provider::Text(TextVersionResolver::new(config.xrg.clone(), fetcher))
            }
            Variant::Feed => {
                validate_endpoint(&config.launchbar5.feed_url)
                    .context("providers.launchbar5.feed_url")?;
                Provider::Feed(FeedReleaseResolver::new(config.launchbar5.clone(), fetcher))
            }
        };
        tracing::debug!("built provider {} ({:?})", info.name, info.variant);
        Ok(provider)
    }

    pub fn variant(&self) -> Variant {
        match self {
            Provider::Text(_) => Variant::Text,
            Provider::Feed(_) => Variant::Feed,
        }
    }
}

impl<F: Fetcher> Resolver for Provider<F> {
    fn resolve(&self) -> Result<ResolvedRelease, ResolveError> {
        match self {
            Provider::Text(r) => r.resolve(),
            Provider::Feed(r) => r.resolve(),
        }
    }
}
