//! Blocking GET over libcurl.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Fetcher;
use crate::error::FetchError;

/// Transport settings for update-check requests (`[fetch]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, redirects included.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: concat!("upcheck/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// [`Fetcher`] backed by a fresh `curl::easy::Easy` handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl Fetcher for CurlFetcher {
    /// Follows redirects. Runs on the calling thread.
    ///
    /// The status check only applies to http(s); libcurl reports 0 for
    /// `file://`, where a missing file already fails the transfer.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.max_redirections(10).map_err(transport)?;
        easy.useragent(&self.options.user_agent).map_err(transport)?;
        easy.connect_timeout(Duration::from_secs(self.options.connect_timeout_secs))
            .map_err(transport)?;
        easy.timeout(Duration::from_secs(self.options.timeout_secs))
            .map_err(transport)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let code = easy.response_code().map_err(transport)?;
        if has_http_status(url) && !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }

        tracing::debug!("GET {} -> {} ({} bytes)", url, code, body.len());
        Ok(body)
    }
}

fn has_http_status(url: &str) -> bool {
    url::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(true)
}
