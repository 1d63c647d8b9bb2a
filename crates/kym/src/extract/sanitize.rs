// ABOUTME: Text cleanup for entry body fragments.
// ABOUTME: Strips bracketed citation markers like [1] while leaving markup and other brackets alone.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches numeric citation markers: a `[` then digits then `]`.
static FOOTNOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+\]").expect("footnote regex must compile"));

/// Remove `[n]` citation markers from a fragment.
///
/// Everything else passes through untouched, embedded tags included.
pub fn strip_footnotes(fragment: &str) -> String {
    match FOOTNOTE_RE.replace_all(fragment, "") {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
