//! Language keys.
//!
//! A [`LangKey`] is the normalized (lower-cased) form of a language code as it
//! appears in an opening marker, or the sentinel [`OTHER`] for a bare
//! `{mlang}` block. Keys borrow from their source whenever lower-casing would
//! not change anything.

use std::{borrow::Cow, fmt};
use thiserror::Error;

/// Key used for blocks opened with a bare `{mlang}`.
pub const OTHER: LangKey<'static> = LangKey(Cow::Borrowed("other"));

/// English, the fixed fallback tried after the caller's own languages.
pub const EN: LangKey<'static> = LangKey(Cow::Borrowed("en"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LangKeyError {
    #[error("language code is empty")]
    Empty,

    #[error("invalid language code `{0}`: expected `xx` or `xx_yy` (ASCII letters)")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LangKey<'a>(Cow<'a, str>);

impl<'a> LangKey<'a> {
    /// Normalize any caller-supplied language string.
    ///
    /// No validation happens here: requested languages are matched as plain
    /// case-insensitive keys, whatever their shape.
    #[inline]
    pub fn normalize(code: &'a str) -> Self {
        if code.chars().any(|c| c.to_lowercase().next() != Some(c)) {
            LangKey(Cow::Owned(code.to_lowercase()))
        } else {
            LangKey(Cow::Borrowed(code))
        }
    }

    /// Validate `code` against the marker grammar (`xx` or `xx_yy`) and
    /// normalize it.
    pub fn parse(code: &'a str) -> Result<Self, LangKeyError> {
        if code.is_empty() {
            return Err(LangKeyError::Empty);
        }
        match code_len(code) {
            Some(n) if n == code.len() => Ok(Self::normalize(code)),
            _ => Err(LangKeyError::Malformed(code.to_string())),
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_other(&self) -> bool {
        self.as_str() == OTHER.as_str()
    }

    pub fn into_owned(self) -> LangKey<'static> {
        LangKey(Cow::Owned(self.0.into_owned()))
    }
}

impl fmt::Display for LangKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LangKey<'_> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LangKey<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for LangKey<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Length in bytes of the language code at the start of `s`, if any.
///
/// Two ASCII letters, optionally followed by `_` and two more. The longer
/// form wins when both fit.
#[inline]
pub(crate) fn code_len(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let letters = |i: usize| b.len() >= i + 2 && b[i].is_ascii_alphabetic() && b[i + 1].is_ascii_alphabetic();
    if !letters(0) {
        return None;
    }
    if b.get(2) == Some(&b'_') && letters(3) {
        Some(5)
    } else {
        Some(2)
    }
}
