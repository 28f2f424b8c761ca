//! Pattern-based value extraction from the act body.

use regex::Regex;

use crate::text::normalize;

/// Extract a value from the act body using an ordered pattern list.
///
/// The body is normalized once, then each pattern is tried in order; the
/// first non-empty trimmed capture (group 1) wins. Returns None when no
/// pattern captures anything.
pub fn extract_value(body: &str, patterns: &[Regex]) -> Option<String> {
    let normalized = normalize(body);

    for pattern in patterns {
        if let Some(captures) = pattern.captures(&normalized) {
            if let Some(capture) = captures.get(1) {
                let value = capture.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}
