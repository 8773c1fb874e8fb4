//! JSON manifest (`package.json`) field assignment.

use super::SubstitutionRule;
use indexmap::IndexMap;

/// Sets each rule's key to its replacement string.
///
/// Existing keys keep their position, new keys are appended, and nothing
/// else changes. The result is pretty-printed with a trailing newline.
///
/// # Errors
/// * If `content` is not a JSON object
pub fn assign_fields(
    content: &str,
    rules: &[SubstitutionRule<'_>],
) -> serde_json::Result<String> {
    let mut manifest: IndexMap<String, serde_json::Value> = serde_json::from_str(content)?;

    for rule in rules {
        manifest.insert(
            rule.marker.to_string(),
            serde_json::Value::String(rule.replacement.to_string()),
        );
    }

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    Ok(output)
}
