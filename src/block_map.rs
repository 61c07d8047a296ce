//! Language Block Mapping.
//!
//! Insertion-ordered and last-write-wins: re-inserting a key replaces its
//! text but keeps the slot where the key first appeared. Typical content
//! carries a handful of languages, so entries live inline in a `SmallVec`
//! and lookups are linear.

use crate::{lang::LangKey, parse::Block};
use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMap<'a> {
    entries: SmallVec<[(LangKey<'a>, &'a str); 4]>,
}

impl<'a> BlockMap<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` under `key`, returning the text it replaced.
    pub fn insert(&mut self, key: LangKey<'a>, text: &'a str) -> Option<&'a str> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, text)),
            None => {
                self.entries.push((key, text));
                None
            }
        }
    }

    /// Exact lookup on an already-normalized key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|&(_, text)| text)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entry that was inserted first.
    #[inline]
    pub fn first(&self) -> Option<(&LangKey<'a>, &'a str)> {
        self.entries.first().map(|(k, text)| (k, *text))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LangKey<'a>> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LangKey<'a>, &'a str)> {
        self.entries.iter().map(|(k, text)| (k, *text))
    }
}

impl<'a> Extend<Block<'a>> for BlockMap<'a> {
    fn extend<I: IntoIterator<Item = Block<'a>>>(&mut self, iter: I) {
        for block in iter {
            self.insert(block.key, block.text);
        }
    }
}

impl<'a> FromIterator<Block<'a>> for BlockMap<'a> {
    fn from_iter<I: IntoIterator<Item = Block<'a>>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a> FromIterator<(LangKey<'a>, &'a str)> for BlockMap<'a> {
    fn from_iter<I: IntoIterator<Item = (LangKey<'a>, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, text) in iter {
            map.insert(key, text);
        }
        map
    }
}
