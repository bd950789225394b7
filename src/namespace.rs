//! Namespace Validator: content-namespace membership for parsed titles.

use crate::config::SiteConfig;
use crate::title;
use crate::types::ParsedTitle;

/// Parse title text and accept it only when its namespace is configured
/// as content. Empty text, malformed titles, and titles outside the
/// content namespaces all yield `None`.
pub fn validate(title_text: &str, config: &SiteConfig) -> Option<ParsedTitle> {
    if title_text.is_empty() {
        return None;
    }

    let parsed = title::parse_title(title_text, config)?;
    if config.content_namespaces.contains(&parsed.namespace_id) {
        Some(parsed)
    } else {
        None
    }
}
