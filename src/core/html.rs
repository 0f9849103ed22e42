// src/core/html.rs

// Anchor scanning over the raw document. The payload sits between two fixed
// exact-case markers, so plain substring search beats tag-aware parsing here.

/// Slice the text strictly between `open` and the first `close` after it.
/// `open` itself is not included; `close` ends the slice.
pub fn slice_between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = s.find(open)? + open.len();
    let end = s[start..].find(close)? + start;
    Some(&s[start..end])
}
