/// Core domain types for link elements, titles, and resolved targets.
use std::collections::HashSet;

use url::Url;

/// Opaque element identity supplied by the host.
/// The host must not reuse an id within a document's lifetime; the
/// foreign-link cache keys its write-once memos by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(
    /// The host-assigned identity value.
    pub u64,
);

/// Read-only view of an anchor element, as the host's DOM exposes it.
///
/// `title_attribute` may be blanked by unrelated UI state after the element
/// is first classified; the resolver never re-reads it once a classification
/// is memoized.
#[derive(Debug, Clone)]
pub struct LinkElement {
    /// Class names on the element (`extiw` marks interwiki links).
    pub css_classes: HashSet<String>,
    /// Raw fragment including the leading `#`, empty when absent.
    pub hash: String,
    /// Host of the link target, with port when non-default.
    pub host: String,
    /// Absolute URL the link points to.
    pub href: String,
    /// Opaque per-element identity.
    pub id: ElementId,
    /// Path component of the link target.
    pub pathname: String,
    /// Raw query string without the leading `?`, empty when absent.
    pub search: String,
    /// Descriptive title attribute (interwiki prefix and page for `extiw` links).
    pub title_attribute: String,
}

impl LinkElement {
    /// Build an element view from an absolute href, filling in
    /// `host`/`pathname`/`search`/`hash` the way a browser fills them in on
    /// an anchor. Returns `None` when the href is not an absolute,
    /// parseable URL with a host.
    pub fn from_absolute_href(
        id: ElementId,
        href: &str,
        title_attribute: &str,
        css_classes: impl IntoIterator<Item = String>,
    ) -> Option<Self> {
        let url = Url::parse(href).ok()?;
        return Some(Self {
            css_classes: css_classes.into_iter().collect(),
            hash: url.fragment().map(|f| format!("#{f}")).unwrap_or_default(),
            host: host_with_port(&url)?,
            href: href.to_string(),
            id,
            pathname: url.path().to_string(),
            search: url.query().unwrap_or("").to_string(),
            title_attribute: title_attribute.to_string(),
        });
    }
}

/// Render a URL's host the way the DOM `host` property does: hostname plus
/// `:port` when the port is non-default for the scheme.
pub(crate) fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    return match url.port() {
        Some(port) => Some(format!("{host}:{port}")),
        None => Some(host.to_string()),
    };
}

/// Intermediate extraction result: a non-empty title string, optionally
/// paired with a foreign API endpoint when the link is interwiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTitleInfo {
    /// Foreign API endpoint, present only for interwiki links.
    pub foreign_api_url: Option<String>,
    /// Decoded title text, fragment suffix included.
    pub title: String,
}

/// Structured identity of a page, produced by the title grammar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParsedTitle {
    /// Canonical title text; carries any `#fragment` suffix verbatim.
    pub full_text: String,
    /// Namespace id; 0 is the main namespace.
    pub namespace_id: i32,
}

/// The final answer of resolution. Produced fresh per call, never mutated;
/// absence (`None` from `resolve`) means "not a previewable link".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedTarget {
    /// Foreign API endpoint when the target lives on another wiki.
    /// A target with this set is never namespace-validated; a target
    /// without it always sits in a configured content namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_api_url: Option<String>,
    /// Canonical identity of the target page.
    pub parsed_title: ParsedTitle,
}
