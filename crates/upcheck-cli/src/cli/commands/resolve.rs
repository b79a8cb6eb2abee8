//! `upcheck resolve <provider>` – resolve and print the environment.

use anyhow::{Context, Result};
use upcheck_core::catalog::Provider;
use upcheck_core::config::UpcheckConfig;
use upcheck_core::env::{Environment, OutputFormat};
use upcheck_core::fetch::CurlFetcher;
use upcheck_core::Resolver;

pub fn run_resolve(
    cfg: &UpcheckConfig,
    provider: &str,
    channel: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let fetcher = CurlFetcher::new(cfg.fetch.clone());
    let resolver = Provider::build(provider, &cfg.providers, fetcher)?;

    let release = match (&resolver, channel) {
        (Provider::Feed(feed), Some(channel)) => feed.resolve_channel(channel),
        (Provider::Text(_), Some(channel)) => anyhow::bail!(
            "--channel {} given, but {} is a plain-text provider without channels",
            channel,
            provider
        ),
        (_, None) => resolver.resolve(),
    }
    .with_context(|| format!("resolve {}", provider))?;

    let mut env = Environment::new();
    env.emit_release(&release);
    print!("{}", env.render(format)?);
    Ok(())
}
