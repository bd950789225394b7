//! Per-element memo of interwiki classification.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::ElementId;

/// Outcome of classifying an `extiw` element's title attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterwikiMemo {
    /// Recognized prefix: foreign API endpoint plus the remote page title.
    Endpoint {
        /// Configured API base URL for the prefix.
        api_url: String,
        /// Page title on the foreign wiki (text after the first `:`).
        title: String,
    },
    /// Known-foreign link whose prefix has no configured endpoint.
    /// Never previewable.
    Unknown,
}

/// Write-once side table from element identity to interwiki classification.
///
/// The title attribute a classification is derived from may be blanked by
/// unrelated UI state while a preview is open, so the first classification
/// is kept for the element's lifetime and never recomputed. The host drops
/// the whole cache with the document; entries are never iterated or
/// evicted here. Single-threaded host state — not shared across threads.
#[derive(Debug, Default)]
pub struct ForeignLinkCache {
    entries: RefCell<HashMap<ElementId, InterwikiMemo>>,
}

impl ForeignLinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the memoized classification for an element.
    pub fn get(&self, id: ElementId) -> Option<InterwikiMemo> {
        self.entries.borrow().get(&id).cloned()
    }

    /// Store a classification. First write wins; a later `set` for the
    /// same element is ignored, so a stored answer can never change.
    pub fn set(&self, id: ElementId, memo: InterwikiMemo) {
        self.entries.borrow_mut().entry(id).or_insert(memo);
    }
}
