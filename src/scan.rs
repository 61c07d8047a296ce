//! Marker recognition.
//!
//! Opening marker: `{mlang`, optional whitespace, optional code, `}`.
//! Closing marker: `{`, optional whitespace, `mlang`, optional whitespace, `}`.
//!
//! A bare `{mlang}` is both a valid opener and a valid closer; which role it
//! plays depends only on where the cursor is when it is reached.

use crate::lang::code_len;
use memchr::{memchr_iter, memmem};

const OPEN: &str = "{mlang";
const NAME: &str = "mlang";

/// An opening marker found in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Opener<'a> {
    /// Byte offset of `{`.
    pub start: usize,
    /// Byte offset just past `}`.
    pub end: usize,
    /// Raw (not yet lower-cased) code, `None` for a bare opener.
    pub code: Option<&'a str>,
}

/// A closing marker found in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Closer {
    pub start: usize,
    pub end: usize,
}

#[inline]
fn skip_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// Match an opening marker exactly at `pos`.
pub(crate) fn opener_at(text: &str, pos: usize) -> Option<Opener<'_>> {
    let after = text.get(pos..)?.strip_prefix(OPEN)?;
    let ws = skip_whitespace(after);
    let body = &after[ws..];
    let (code, rest) = match code_len(body) {
        Some(n) => (Some(&body[..n]), &body[n..]),
        None => (None, body),
    };
    rest.strip_prefix('}')?;
    let end = text.len() - rest.len() + 1;
    Some(Opener { start: pos, end, code })
}

/// Match a closing marker exactly at `pos`.
pub(crate) fn closer_at(text: &str, pos: usize) -> Option<Closer> {
    let after = text.get(pos..)?.strip_prefix('{')?;
    let after = after[skip_whitespace(after)..].strip_prefix(NAME)?;
    let rest = after[skip_whitespace(after)..].strip_prefix('}')?;
    Some(Closer { start: pos, end: text.len() - rest.len() })
}

/// Leftmost opening marker starting at or after `from`.
pub(crate) fn find_opener(text: &str, from: usize) -> Option<Opener<'_>> {
    let hay = text.as_bytes().get(from..)?;
    memmem::find_iter(hay, OPEN.as_bytes()).find_map(|i| opener_at(text, from + i))
}

/// Leftmost closing marker starting at or after `from`.
pub(crate) fn find_closer(text: &str, from: usize) -> Option<Closer> {
    let hay = text.as_bytes().get(from..)?;
    memchr_iter(b'{', hay).find_map(|i| closer_at(text, from + i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_with_code() {
        let o = opener_at("{mlang pt_BR}x", 0).unwrap();
        assert_eq!(o.code, Some("pt_BR"));
        assert_eq!((o.start, o.end), (0, 13));
    }

    #[test]
    fn opener_without_whitespace_before_code() {
        assert_eq!(opener_at("{mlangen}", 0).unwrap().code, Some("en"));
    }

    #[test]
    fn bare_opener() {
        let o = opener_at("{mlang}", 0).unwrap();
        assert_eq!(o.code, None);
        assert_eq!(o.end, 7);
        assert_eq!(opener_at("{mlang \n }", 0).unwrap().end, 10);
    }

    #[test]
    fn opener_rejects_bad_codes() {
        for s in ["{mlang eng}", "{mlang e}", "{mlang pt_b}", "{mlang en }", "{ mlang en}", "{mlang pt-br}"] {
            assert!(opener_at(s, 0).is_none(), "{s}");
        }
    }

    #[test]
    fn closer_allows_whitespace_around_name() {
        assert_eq!(closer_at("{mlang}", 0), Some(Closer { start: 0, end: 7 }));
        assert_eq!(closer_at("{ mlang\t}", 0), Some(Closer { start: 0, end: 9 }));
        assert!(closer_at("{mlang en}", 0).is_none());
        assert!(closer_at("{mlan}", 0).is_none());
    }

    #[test]
    fn find_skips_non_markers() {
        let text = "a {b} {mlang xyz} {mlang fr}c";
        let o = find_opener(text, 0).unwrap();
        assert_eq!(o.code, Some("fr"));
        assert_eq!(&text[o.start..o.end], "{mlang fr}");
    }

    #[test]
    fn find_closer_after_offset() {
        let text = "{mlang}ab{ mlang }";
        let c = find_closer(text, 1).unwrap();
        assert_eq!(&text[c.start..c.end], "{ mlang }");
        assert!(find_closer(text, text.len()).is_none());
        assert!(find_closer(text, text.len() + 1).is_none());
    }

    #[test]
    fn multibyte_text_is_safe() {
        let text = "ação {mlang pt}é{mlang}";
        let o = find_opener(text, 0).unwrap();
        let c = find_closer(text, o.end).unwrap();
        assert_eq!(&text[o.end..c.start], "é");
    }
}
