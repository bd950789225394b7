//! Page-title grammar: `"Namespace:Name"` text to structured identity.

use crate::config::SiteConfig;
use crate::types::ParsedTitle;

/// Namespace id of unprefixed titles.
pub const MAIN_NAMESPACE: i32 = 0;

/// Parse title text into `(namespace id, canonical full text)`.
///
/// Underscores fold to spaces and surrounding whitespace is trimmed; name
/// case is otherwise preserved. A recognized namespace prefix contributes
/// its configured id and canonical spelling; unprefixed text and text with
/// an unrecognized prefix are main-namespace, with the colon kept as part
/// of the name. A `#fragment` suffix stays inside `full_text` untouched
/// beyond the underscore fold — nothing in this crate wants it stripped.
///
/// Returns `None` for malformed text: empty or whitespace-only, control
/// characters, or an empty page name after a recognized prefix.
pub fn parse_title(text: &str, config: &SiteConfig) -> Option<ParsedTitle> {
    let folded = text.replace('_', " ");
    let trimmed = folded.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
        return None;
    }

    if let Some((prefix, rest)) = trimmed.split_once(':') {
        if let Some((canonical, namespace_id)) = config.namespace_by_prefix(prefix) {
            let name = rest.trim_start();
            if name.is_empty() {
                return None;
            }
            return Some(ParsedTitle {
                full_text: format!("{canonical}:{name}"),
                namespace_id,
            });
        }
    }

    Some(ParsedTitle {
        full_text: trimmed.to_string(),
        namespace_id: MAIN_NAMESPACE,
    })
}
