use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::Error;

/// Site configuration snapshot, immutable per page load.
///
/// Mirrors what the host page knows about itself: its own location, the
/// article path template, which namespaces are article-like, and the
/// interwiki prefix table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SiteConfig {
    /// Path pattern with a single `$1` placeholder marking the page title.
    pub article_path: String,
    /// Namespace ids considered article-like and eligible for preview.
    pub content_namespaces: HashSet<i32>,
    /// Host of the current document, with port when non-default.
    pub current_host: String,
    /// Title of the currently rendered page.
    pub current_page_title: String,
    /// Path of the current document location.
    pub current_pathname: String,
    /// Raw query string of the current document location, without `?`.
    #[serde(default)]
    pub current_search: String,
    /// Interwiki prefix to foreign API base URL.
    #[serde(default)]
    pub interwiki: HashMap<String, String>,
    /// Canonical namespace name to id. Lookup folds case and underscores;
    /// the key as written is the canonical spelling used in `full_text`.
    #[serde(default)]
    pub namespaces: HashMap<String, i32>,
}

impl SiteConfig {
    /// Load and validate a site config from a TOML file.
    /// Never silently falls back to defaults when the user wrote a config
    /// file — a malformed file is an error, not an empty site.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigNotFound` if the file doesn't exist,
    /// `Error::Io` for other read failures,
    /// `Error::TomlDe` if the content is invalid TOML,
    /// or `Error::InvalidArticlePath` if the template is malformed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound { path: path.to_path_buf() });
            },
            Err(e) => return Err(Error::Io(e)),
        };

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants that TOML deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArticlePath` unless the template contains
    /// exactly one `$1` placeholder.
    pub fn validate(&self) -> Result<(), Error> {
        if self.article_path.matches("$1").count() != 1 {
            return Err(Error::InvalidArticlePath {
                template: self.article_path.clone(),
            });
        }
        Ok(())
    }

    /// Look up a namespace prefix, returning `(canonical name, id)`.
    /// Matching folds case and treats underscores as spaces, so
    /// `user_talk` and `User Talk` both find a `User talk` entry.
    pub fn namespace_by_prefix(&self, prefix: &str) -> Option<(&str, i32)> {
        let wanted = fold_prefix(prefix);
        self.namespaces
            .iter()
            .find(|(name, _)| fold_prefix(name) == wanted)
            .map(|(name, id)| (name.as_str(), *id))
    }
}

/// Normalize a namespace prefix for comparison.
fn fold_prefix(prefix: &str) -> String {
    prefix.trim().replace('_', " ").to_lowercase()
}
