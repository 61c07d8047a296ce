// src/context.rs
// Requested languages, normalized once and reused for every selection.

use crate::lang::{EN, LangKey};

/// Languages a selection is made for.
///
/// Contains:
/// - `current`: the caller's active language
/// - `fallback`: optional second choice tried before the fixed `en`/`other` chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context<'l> {
    pub current: LangKey<'l>,
    pub fallback: Option<LangKey<'l>>,
}

impl Default for Context<'_> {
    #[inline(always)]
    fn default() -> Self {
        Self { current: EN, fallback: None }
    }
}

impl<'l> Context<'l> {
    #[inline]
    pub fn new(current: &'l str) -> Self {
        Self { current: LangKey::normalize(current), fallback: None }
    }

    #[inline]
    pub fn with_fallback(mut self, fallback: &'l str) -> Self {
        self.fallback = Some(LangKey::normalize(fallback));
        self
    }
}
