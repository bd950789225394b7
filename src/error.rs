/// Crate-level error types for configuration and CLI failures.
use std::path::PathBuf;

/// Errors outside the resolution hot path. Resolution itself never errors —
/// every failure there collapses to "not previewable" (`None`); these
/// variants cover site-config loading and interwiki table editing.
#[allow(clippy::error_impl_error, reason = "crate-internal error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file exists but cannot be parsed for format-preserving editing.
    #[error("config malformed: {}: {reason}", path.display())]
    ConfigMalformed {
        /// Path to the malformed config file.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// Expected config file does not exist on disk.
    #[error("config not found: {}", path.display())]
    ConfigNotFound {
        /// Path to the missing config file.
        path: PathBuf,
    },

    /// Article path template does not contain exactly one `$1` placeholder.
    #[error("invalid article path template: `{template}`")]
    InvalidArticlePath {
        /// The offending template string.
        template: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// No configured interwiki prefix matches the given name.
    #[error("unknown interwiki prefix: `{prefix}`")]
    UnknownPrefix {
        /// Prefix that was not found.
        prefix: String,
    },
}
