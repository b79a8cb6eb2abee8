//! Version string normalization.

use crate::error::ResolveError;

/// Minimum number of dot-separated components after padding.
pub const MIN_COMPONENTS: usize = 3;

/// Pads `version` with ".0" components until it has at least three.
///
/// Longer versions are returned unchanged. Every component must be a
/// non-empty run of ASCII digits; anything else (including the empty string)
/// is rejected rather than guessed at.
///
/// # Examples
///
/// - `pad_version("1.7")` → `"1.7.0"`
/// - `pad_version("1")` → `"1.0.0"`
/// - `pad_version("1.7.3.1")` → `"1.7.3.1"`
pub fn pad_version(version: &str) -> Result<String, ResolveError> {
    if version.is_empty() {
        return Err(ResolveError::MalformedInput("version string is empty".to_string()));
    }
    let components: Vec<&str> = version.split('.').collect();
    if let Some(bad) = components
        .iter()
        .find(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(ResolveError::MalformedInput(format!(
            "version {:?} has non-numeric component {:?}",
            version, bad
        )));
    }

    let missing = MIN_COMPONENTS.saturating_sub(components.len());
    Ok(format!("{}{}", version, ".0".repeat(missing)))
}
