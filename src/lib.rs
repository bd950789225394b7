//! Link target resolution for hover page previews.
//!
//! Given a hyperlink element embedded in rendered content and an immutable
//! site configuration, decide whether the link denotes a previewable page
//! and compute its canonical identity: a parsed title (fragment included)
//! plus a foreign API endpoint when the link is interwiki.
//!
//! The crate fetches nothing and renders nothing; the host passes the
//! [`ResolvedTarget`] straight into its preview-fetch pipeline. Every
//! failure on the resolution path collapses to `None` — "not previewable"
//! — never a panic and never an error value.

pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod namespace;
pub mod percent;
pub mod resolver;
pub mod title;
pub mod types;

pub use cache::{ForeignLinkCache, InterwikiMemo};
pub use config::SiteConfig;
pub use error::Error;
pub use resolver::resolve;
pub use types::{ElementId, LinkElement, ParsedTitle, RawTitleInfo, ResolvedTarget};
