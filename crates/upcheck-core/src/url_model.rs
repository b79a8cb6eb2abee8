//! URL handling: filename derivation and endpoint validation.

use anyhow::{Context, Result};

/// Final `/`-separated segment of `url`.
///
/// A URL with no `/` is returned whole. Query strings are not stripped; feed
/// download URLs are used verbatim.
///
/// # Examples
///
/// - `filename_from_url("http://x/a-2.0.dmg")` → `"a-2.0.dmg"`
/// - `filename_from_url("a-2.0.dmg")` → `"a-2.0.dmg"`
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Checks that a configured endpoint is an absolute http(s) or file URL.
pub fn validate_endpoint(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url).with_context(|| format!("invalid URL {:?}", url))?;
    match parsed.scheme() {
        "http" | "https" | "file" => Ok(()),
        other => anyhow::bail!("unsupported scheme {:?} in {}", other, url),
    }
}
