//! Link Classifier: the resolution entry point.
//!
//! Classifies a link as a same-page anchor, an interwiki link, or an
//! ordinary same-site link, in that strict order, and computes the target
//! page identity. Every internal failure — unparseable href, malformed
//! escape, ambiguous query string, unknown prefix, wrong namespace —
//! collapses to `None` ("not previewable"); the caller never sees an error.

use url::Url;

use crate::cache::{ForeignLinkCache, InterwikiMemo};
use crate::config::SiteConfig;
use crate::extract;
use crate::namespace;
use crate::percent;
use crate::title;
use crate::types::{LinkElement, ResolvedTarget, host_with_port};

/// Class name MediaWiki-style renderers put on interwiki links.
const INTERWIKI_CLASS: &str = "extiw";

/// Resolve a link element to the page it denotes, if that page is
/// previewable under the given site configuration.
///
/// Branches are tried in order; the first match wins:
///
/// 1. Self-link: fragment-only navigation within the current page.
/// 2. Interwiki: `extiw`-classed link to a named foreign wiki, classified
///    once per element through the cache.
/// 3. Ordinary same-site link: title extracted from the URL shape, then
///    namespace-validated.
///
/// Called once per pointer/keyboard event on every eligible link, so each
/// call is O(length of href/title text) with no I/O.
pub fn resolve(
    element: &LinkElement,
    config: &SiteConfig,
    cache: &ForeignLinkCache,
) -> Option<ResolvedTarget> {
    if is_self_link(element, config) {
        return resolve_self_link(element, config);
    }

    if element.css_classes.contains(INTERWIKI_CLASS) {
        return resolve_interwiki(element, config, cache);
    }

    resolve_same_site(element, config)
}

/// A link is a same-page anchor iff it has a fragment and its host, path,
/// and query all equal the current document's. Scheme and user-info are
/// not observable from a resolved location and do not participate.
fn is_self_link(element: &LinkElement, config: &SiteConfig) -> bool {
    !element.hash.is_empty()
        && element.host == config.current_host
        && element.pathname == config.current_pathname
        && element.search == config.current_search
}

/// Re-derive the current page's identity with the decoded fragment
/// appended. The fragment stays inside `full_text`, and there is no
/// namespace re-validation — the current page's own title is already
/// known valid.
fn resolve_self_link(element: &LinkElement, config: &SiteConfig) -> Option<ResolvedTarget> {
    let decoded_hash = percent::decode_component(&element.hash)?;
    let qualified = format!("{}{decoded_hash}", config.current_page_title);
    let parsed_title = title::parse_title(&qualified, config)?;
    Some(ResolvedTarget {
        foreign_api_url: None,
        parsed_title,
    })
}

/// Classify an interwiki link, memoizing per element. The title attribute
/// may be blanked while a preview is open, so a cached classification is
/// always preferred over re-reading it, and the fresh classification is
/// stored before any outcome is acted on.
fn resolve_interwiki(
    element: &LinkElement,
    config: &SiteConfig,
    cache: &ForeignLinkCache,
) -> Option<ResolvedTarget> {
    let memo = match cache.get(element.id) {
        Some(memo) => memo,
        None => {
            let memo = classify_interwiki(&element.title_attribute, config);
            cache.set(element.id, memo.clone());
            memo
        },
    };

    match memo {
        InterwikiMemo::Endpoint { api_url, title: foreign_title } => {
            // The foreign wiki's namespace layout is unknown, so the title
            // is trusted unconditionally — no content-namespace check.
            let parsed_title = title::parse_title(&foreign_title, config)?;
            Some(ResolvedTarget {
                foreign_api_url: Some(api_url),
                parsed_title,
            })
        },
        InterwikiMemo::Unknown => None,
    }
}

/// Split a title attribute into interwiki prefix and foreign page title
/// and look the prefix up in the configured endpoint table.
fn classify_interwiki(title_attribute: &str, config: &SiteConfig) -> InterwikiMemo {
    let (prefix, remainder) = match title_attribute.split_once(':') {
        Some(parts) => parts,
        None => (title_attribute, ""),
    };

    match config.interwiki.get(prefix) {
        Some(api_url) => InterwikiMemo::Endpoint {
            api_url: api_url.clone(),
            title: remainder.to_string(),
        },
        None => InterwikiMemo::Unknown,
    }
}

/// Resolve an ordinary same-site link. A cross-site href is never
/// previewable here — a legitimately foreign host is only reachable
/// through the interwiki branch above.
fn resolve_same_site(element: &LinkElement, config: &SiteConfig) -> Option<ResolvedTarget> {
    let url = Url::parse(&element.href).ok()?;
    if host_with_port(&url)? != config.current_host {
        return None;
    }

    let info = extract::extract(&url, config)?;
    let parsed_title = namespace::validate(&info.title, config)?;
    Some(ResolvedTarget {
        foreign_api_url: None,
        parsed_title,
    })
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use crate::types::ElementId;

    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            article_path: "/wiki/$1".to_string(),
            content_namespaces: HashSet::from([0]),
            current_host: "en.wikipedia.org".to_string(),
            current_page_title: "Main Page".to_string(),
            current_pathname: "/wiki/Main_Page".to_string(),
            current_search: String::new(),
            interwiki: HashMap::from([(
                "wikt".to_string(),
                "https://en.wiktionary.org/w/api.php".to_string(),
            )]),
            namespaces: HashMap::from([("Talk".to_string(), 1)]),
        }
    }

    fn element(id: u64, href: &str) -> LinkElement {
        LinkElement::from_absolute_href(ElementId(id), href, "", Vec::new()).unwrap()
    }

    fn interwiki_element(id: u64, title_attribute: &str) -> LinkElement {
        LinkElement::from_absolute_href(
            ElementId(id),
            "https://en.wiktionary.org/wiki/hello",
            title_attribute,
            vec!["extiw".to_string()],
        )
        .unwrap()
    }

    // ── Self-links ─────────────────────────────────────────────────────

    #[test]
    fn self_link_appends_decoded_fragment_to_current_title() {
        let element = element(1, "https://en.wikipedia.org/wiki/Main_Page#Early%20life");
        let target = resolve(&element, &config(), &ForeignLinkCache::new()).unwrap();

        assert_eq!(target.parsed_title.full_text, "Main Page#Early life");
        assert_eq!(target.parsed_title.namespace_id, 0);
        assert_eq!(target.foreign_api_url, None);
    }

    #[test]
    fn self_link_skips_namespace_validation() {
        // Talk is not a content namespace, but the current page's own
        // title is already known valid.
        let mut config = config();
        config.current_page_title = "Talk:Main Page".to_string();
        config.current_pathname = "/wiki/Talk:Main_Page".to_string();

        let element = element(1, "https://en.wikipedia.org/wiki/Talk:Main_Page#Thread");
        let target = resolve(&element, &config, &ForeignLinkCache::new()).unwrap();
        assert_eq!(target.parsed_title.full_text, "Talk:Main Page#Thread");
        assert_eq!(target.parsed_title.namespace_id, 1);
    }

    #[test]
    fn self_link_with_undecodable_fragment_is_rejected() {
        let element = element(1, "https://en.wikipedia.org/wiki/Main_Page#Bad%GGEscape");
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());
    }

    #[test]
    fn same_path_without_fragment_is_not_a_self_link() {
        // No hash: falls through to ordinary resolution of the same page.
        let element = element(1, "https://en.wikipedia.org/wiki/Main_Page");
        let target = resolve(&element, &config(), &ForeignLinkCache::new()).unwrap();
        assert_eq!(target.parsed_title.full_text, "Main Page");
    }

    #[test]
    fn differing_search_is_not_a_self_link() {
        let element = element(1, "https://en.wikipedia.org/wiki/Main_Page?action=edit#x");
        // Falls through to ordinary resolution, where the ambiguous query
        // makes it non-previewable.
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());
    }

    // ── Interwiki ──────────────────────────────────────────────────────

    #[test]
    fn known_prefix_yields_foreign_target_without_validation() {
        let element = interwiki_element(1, "wikt:hello");
        let target = resolve(&element, &config(), &ForeignLinkCache::new()).unwrap();

        assert_eq!(target.parsed_title.full_text, "hello");
        assert_eq!(
            target.foreign_api_url.as_deref(),
            Some("https://en.wiktionary.org/w/api.php")
        );
    }

    #[test]
    fn unknown_prefix_is_not_previewable() {
        let element = interwiki_element(1, "voy:Paris");
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());
    }

    #[test]
    fn classification_survives_title_attribute_blanking() {
        let cache = ForeignLinkCache::new();
        let mut element = interwiki_element(1, "wikt:hello");

        let first = resolve(&element, &config(), &cache).unwrap();

        // Unrelated UI state blanks the attribute while the preview is open.
        element.title_attribute = String::new();
        let second = resolve(&element, &config(), &cache).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_classification_is_memoized_too() {
        let cache = ForeignLinkCache::new();
        let mut element = interwiki_element(1, "voy:Paris");

        assert!(resolve(&element, &config(), &cache).is_none());

        // Even if the attribute later spells a known prefix, the first
        // classification stands.
        element.title_attribute = "wikt:hello".to_string();
        assert!(resolve(&element, &config(), &cache).is_none());
    }

    #[test]
    fn attribute_without_colon_is_unknown() {
        let element = interwiki_element(1, "hello");
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());
    }

    #[test]
    fn foreign_host_with_extiw_class_is_allowed() {
        // The interwiki branch runs before the same-host check, so the
        // foreign host is not a reason to reject.
        let element = interwiki_element(1, "wikt:colophon");
        let target = resolve(&element, &config(), &ForeignLinkCache::new()).unwrap();
        assert_eq!(target.parsed_title.full_text, "colophon");
    }

    // ── Ordinary same-site links ───────────────────────────────────────

    #[test]
    fn pretty_url_round_trips_the_title() {
        let element = element(1, "https://en.wikipedia.org/wiki/Albert%20Einstein");
        let target = resolve(&element, &config(), &ForeignLinkCache::new()).unwrap();
        assert_eq!(target.parsed_title.full_text, "Albert Einstein");
        assert_eq!(target.foreign_api_url, None);
    }

    #[test]
    fn title_query_parameter_resolves() {
        let element = element(1, "https://en.wikipedia.org/w/index.php?title=Albert_Einstein");
        let target = resolve(&element, &config(), &ForeignLinkCache::new()).unwrap();
        assert_eq!(target.parsed_title.full_text, "Albert Einstein");
    }

    #[test]
    fn extra_query_parameters_are_not_previewable() {
        let element =
            element(1, "https://en.wikipedia.org/w/index.php?title=Albert_Einstein&oldid=5");
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());

        let edit_element = self::element(2, "https://en.wikipedia.org/w/index.php?title=X&action=edit");
        assert!(resolve(&edit_element, &config(), &ForeignLinkCache::new()).is_none());
    }

    #[test]
    fn cross_site_link_without_extiw_is_not_previewable() {
        let element = element(1, "https://de.wikipedia.org/wiki/Berlin");
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());
    }

    #[test]
    fn non_content_namespace_is_not_previewable() {
        let element = element(1, "https://en.wikipedia.org/wiki/Albert_Einstein");
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_some());

        let talk_element = self::element(2, "https://en.wikipedia.org/wiki/Talk:Albert_Einstein");
        assert!(resolve(&talk_element, &config(), &ForeignLinkCache::new()).is_none());
    }

    #[test]
    fn unparseable_href_is_not_previewable() {
        let mut element = element(1, "https://en.wikipedia.org/wiki/Foo");
        element.href = "https://".to_string();
        assert!(resolve(&element, &config(), &ForeignLinkCache::new()).is_none());
    }
}
