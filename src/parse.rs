//! Tag Parser.
//!
//! Walks the source left to right with a byte cursor. Each opener is paired
//! with the first closer after it; the cursor then resumes just past that
//! closer, so markers inside a captured block are never matched on their
//! own. An opener with no closer anywhere after it ends the scan: every later
//! opener would be unterminated too.

use crate::{
    block_map::BlockMap,
    lang::{LangKey, OTHER},
    scan::{find_closer, find_opener},
};
use std::{iter::FusedIterator, ops::Range};
use tracing::trace;

/// One matched marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub key: LangKey<'a>,
    /// Inner content with surrounding whitespace trimmed.
    pub text: &'a str,
    /// Byte range of the whole pair, opener through closer.
    pub span: Range<usize>,
}

/// Iterator over every marker pair in scan order, duplicates included.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    text: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> Blocks<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0, done: false }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        if self.done {
            return None;
        }
        let Some(open) = find_opener(self.text, self.cursor) else {
            self.done = true;
            return None;
        };
        let Some(close) = find_closer(self.text, open.end) else {
            trace!(at = open.start, "unterminated mlang opener");
            self.done = true;
            return None;
        };
        self.cursor = close.end;

        let key = open.code.map_or(OTHER, LangKey::normalize);
        let text = self.text[open.end..close.start].trim();
        trace!(key = %key, span = ?(open.start..close.end), "mlang block");
        Some(Block { key, text, span: open.start..close.end })
    }
}

impl FusedIterator for Blocks<'_> {}

/// Parse `raw` into its Language Block Mapping.
///
/// Returns an empty map when `raw` holds no complete marker pair.
#[inline]
pub fn parse(raw: &str) -> BlockMap<'_> {
    Blocks::new(raw).collect()
}
