//! Emission of resolved values into the shared execution environment.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::resolver::ResolvedRelease;

/// How the environment is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key=value`, one per line.
    #[default]
    Env,
    Json,
    /// XML property-list dictionary.
    Plist,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            "plist" => Ok(OutputFormat::Plist),
            other => Err(format!("unknown format {:?} (expected env, json or plist)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Env => "env",
            OutputFormat::Json => "json",
            OutputFormat::Plist => "plist",
        };
        f.write_str(s)
    }
}

/// String variables handed to the surrounding workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Writes `version`, `filename` and `url`, replacing earlier values.
    pub fn emit_release(&mut self, release: &ResolvedRelease) {
        self.set("version", release.version.as_str());
        self.set("filename", release.filename.as_str());
        self.set("url", release.url.as_str());
        tracing::debug!("emitted release into environment: {:?}", release);
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Env => Ok(self
                .vars
                .iter()
                .map(|(k, v)| format!("{}={}\n", k, v))
                .collect()),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(&self.vars).context("encode JSON")?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Plist => {
                let mut buf = Vec::new();
                plist::to_writer_xml(&mut buf, &self.vars).context("encode plist")?;
                buf.push(b'\n');
                String::from_utf8(buf).context("plist output is not UTF-8")
            }
        }
    }
}
