//! URL Title Extractor: pretty-URL and query-string title extraction.

use regex::Regex;
use url::Url;

use crate::config::SiteConfig;
use crate::percent;
use crate::types::RawTitleInfo;

/// Extract a raw title from an already-parsed same-site URL.
///
/// A URL with no query parameters at all is matched against the article
/// path template ("pretty" URL); a URL whose only parameter is `title`
/// uses that value as-is. Any other parameter combination is ambiguous and
/// yields `None`, as does an empty title or a malformed percent-escape in
/// the matched path segment. A URL fragment is re-appended to the title
/// with a `#` separator.
pub fn extract(url: &Url, config: &SiteConfig) -> Option<RawTitleInfo> {
    let mut pairs = url.query_pairs();
    let raw_title = match pairs.next() {
        None => title_from_pretty_path(url.path(), &config.article_path)?,
        Some((name, value)) => {
            // A pretty URL plus a query string is not a shape the template
            // can express unambiguously, so anything beyond a lone `title`
            // parameter is never previewable.
            if pairs.next().is_some() || name != "title" {
                return None;
            }
            value.into_owned()
        },
    };

    if raw_title.is_empty() {
        return None;
    }

    let title = match url.fragment() {
        Some(fragment) => format!("{raw_title}#{fragment}"),
        None => raw_title,
    };

    Some(RawTitleInfo {
        foreign_api_url: None,
        title,
    })
}

/// Match a URL path against the `$1` article path template and decode the
/// captured segment. The template is escaped in full before the
/// placeholder is swapped for a capturing group, so template text can
/// never act as pattern syntax.
fn title_from_pretty_path(path: &str, template: &str) -> Option<String> {
    let pattern = format!("^{}$", regex::escape(template).replace("\\$1", "([^?#]+)"));
    let matcher = Regex::new(&pattern).ok()?;
    let captured = matcher.captures(path)?.get(1)?.as_str();
    percent::decode_component(captured)
}
