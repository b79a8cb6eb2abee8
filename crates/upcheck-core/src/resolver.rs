//! Resolver interface for turning a vendor update-check resource into a
//! concrete downloadable artifact.
//!
//! Callers only depend on this trait and do not know whether the upstream is
//! a plain-text version file or a property-list feed.

use serde::Serialize;

use crate::error::ResolveError;

/// The only externally observable result of a resolve: all three fields are
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRelease {
    pub version: String,
    pub filename: String,
    pub url: String,
}

impl ResolvedRelease {
    /// Builds a release, rejecting any empty field.
    pub fn new(version: String, filename: String, url: String) -> Result<Self, ResolveError> {
        for (name, value) in [("version", &version), ("filename", &filename), ("url", &url)] {
            if value.trim().is_empty() {
                return Err(ResolveError::MalformedInput(format!("resolved {} is empty", name)));
            }
        }
        Ok(Self {
            version,
            filename,
            url,
        })
    }
}

/// Implemented by each update-check variant.
pub trait Resolver {
    fn resolve(&self) -> Result<ResolvedRelease, ResolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_release_holds_fields() {
        let r = ResolvedRelease::new(
            "1.7.3".to_string(),
            "XRG-release-1.7.3.zip".to_string(),
            "http://download.gauchosoft.com/xrg/XRG-release-1.7.3.zip".to_string(),
        )
        .unwrap();
        assert_eq!(r.version, "1.7.3");
        assert_eq!(r.filename, "XRG-release-1.7.3.zip");
        assert_eq!(r.clone(), r);
    }

    #[test]
    fn resolved_release_rejects_empty_field() {
        let err = ResolvedRelease::new("2.0".to_string(), String::new(), "http://x/".to_string())
            .unwrap_err();
        assert!(matches!(err, ResolveError::MalformedInput(ref m) if m.contains("filename")));
    }
}
