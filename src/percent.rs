//! Strict percent-decoding for URL components.
//!
//! `percent_encoding` passes malformed escapes through untouched; the
//! resolution rules need them to fail, so escapes are validated up front
//! and non-UTF-8 decodes are rejected.

use percent_encoding::percent_decode_str;

/// Decode a percent-encoded URL component.
///
/// Returns `None` when the input contains a `%` not followed by two hex
/// digits, or when the decoded bytes are not valid UTF-8.
pub fn decode_component(raw: &str) -> Option<String> {
    if !escapes_are_well_formed(raw) {
        return None;
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Check that every `%` in the input starts a two-hex-digit escape.
fn escapes_are_well_formed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes.get(i) == Some(&b'%') {
            let well_formed = matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
            );
            if !well_formed {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
