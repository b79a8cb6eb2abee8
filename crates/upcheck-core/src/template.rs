//! `{placeholder}` substitution for filename and download URL templates.

use crate::error::ResolveError;

/// Replaces every `{key}` in `template` with `value`.
///
/// Fails if the template does not mention `{key}`, since the result would
/// not depend on the resolved value.
pub fn render(template: &str, key: &str, value: &str) -> Result<String, ResolveError> {
    let placeholder = format!("{{{}}}", key);
    if !template.contains(&placeholder) {
        return Err(ResolveError::MalformedInput(format!(
            "template {:?} has no {} placeholder",
            template, placeholder
        )));
    }
    Ok(template.replace(&placeholder, value))
}
