use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::ProvidersConfig;
use crate::fetch::FetchOptions;

/// Global configuration loaded from `~/.config/upcheck/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcheckConfig {
    /// Transport settings shared by every provider.
    #[serde(default)]
    pub fetch: FetchOptions,
    /// Upstream endpoints; missing providers keep their built-in values.
    #[serde(default)]
    pub providers: ProvidersConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("upcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UpcheckConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UpcheckConfig> {
    if !path.exists() {
        let default_cfg = UpcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UpcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LAUNCHBAR5_FEED_URL, XRG_UPDATE_URL};

    #[test]
    fn default_config_values() {
        let cfg = UpcheckConfig::default();
        assert_eq!(cfg.fetch.connect_timeout_secs, 15);
        assert_eq!(cfg.fetch.timeout_secs, 30);
        assert_eq!(cfg.providers.xrg.update_url, XRG_UPDATE_URL);
        assert_eq!(cfg.providers.launchbar5.feed_url, LAUNCHBAR5_FEED_URL);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UpcheckConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UpcheckConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_is_default() {
        let cfg: UpcheckConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, UpcheckConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [fetch]
            timeout_secs = 5

            [providers.launchbar5]
            feed_url = "http://mirror.example.com/launchbar-5.plist"
            channel = "beta"
        "#;
        let cfg: UpcheckConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fetch.timeout_secs, 5);
        assert_eq!(cfg.fetch.connect_timeout_secs, 15);
        assert_eq!(
            cfg.providers.launchbar5.feed_url,
            "http://mirror.example.com/launchbar-5.plist"
        );
        assert_eq!(cfg.providers.launchbar5.channel, "beta");
        assert_eq!(cfg.providers.xrg.update_url, XRG_UPDATE_URL);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, UpcheckConfig::default());

        fs::write(&path, "[fetch]\nconnect_timeout_secs = 3\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.fetch.connect_timeout_secs, 3);
    }

    #[test]
    fn load_or_init_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[fetch\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse"));
    }
}
