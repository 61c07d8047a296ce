//! Universal properties every input must satisfy, whatever its markers.
//!
//! 1. `parse_is_pure` → same input, same mapping
//! 2. `blocks_are_ordered_and_disjoint` → spans advance left to right and slice to marker pairs
//! 3. `mapping_matches_last_block_per_key` → every key is backed by a pair, last one wins
//! 4. `selection_is_deterministic` → repeated selection yields the same value and source
//! 5. `selection_comes_from_source` → the selected text is a block or the untouched source

use crate::{
    BlockMap, Blocks, Context, Source, parse, select_with,
};

#[macro_export]
macro_rules! assert_selection_contract {
    ($raw:expr) => {{
        let raw: &str = $raw;
        $crate::testing::selection_contract::parse_is_pure(raw);
        $crate::testing::selection_contract::blocks_are_ordered_and_disjoint(raw);
        $crate::testing::selection_contract::mapping_matches_last_block_per_key(raw);
        $crate::testing::selection_contract::selection_is_deterministic(raw);
        $crate::testing::selection_contract::selection_comes_from_source(raw);
    }};
}

const REQUESTS: &[(&str, Option<&str>)] = &[
    ("en", None),
    ("EN", Some("pt_br")),
    ("fr", None),
    ("fr", Some("de")),
    ("pt_BR", Some("es")),
    ("other", None),
    ("", None),
];

fn contexts() -> impl Iterator<Item = Context<'static>> {
    REQUESTS.iter().map(|&(cur, fb)| {
        let ctx = Context::new(cur);
        match fb {
            Some(fb) => ctx.with_fallback(fb),
            None => ctx,
        }
    })
}

pub fn parse_is_pure(raw: &str) {
    assert_eq!(parse(raw), parse(raw), "parse differs between calls for {raw:?}");
}

pub fn blocks_are_ordered_and_disjoint(raw: &str) {
    let mut last_end = 0;
    for block in Blocks::new(raw) {
        assert!(block.span.start >= last_end, "overlapping blocks in {raw:?}");
        let pair = &raw[block.span.clone()];
        assert!(pair.starts_with("{mlang"), "span {pair:?} does not start at an opener");
        assert!(pair.ends_with('}'), "span {pair:?} does not end at a closer");
        assert!(pair.contains(block.text), "block text outside its span");
        assert_eq!(block.text, block.text.trim(), "untrimmed block text");
        last_end = block.span.end;
    }
}

pub fn mapping_matches_last_block_per_key(raw: &str) {
    let map = parse(raw);
    let blocks: Vec<_> = Blocks::new(raw).collect();
    assert_eq!(map.is_empty(), blocks.is_empty());
    for (key, text) in map.iter() {
        let last = blocks
            .iter()
            .rev()
            .find(|b| b.key == *key)
            .unwrap_or_else(|| panic!("key `{key}` has no marker pair in {raw:?}"));
        assert_eq!(last.text, text, "key `{key}` is not last-write-wins");
    }
    for block in &blocks {
        assert!(map.contains_key(block.key.as_str()));
    }
}

pub fn selection_is_deterministic(raw: &str) {
    let map = parse(raw);
    for ctx in contexts() {
        let first = select_with(&map, &ctx, raw);
        for _ in 0..3 {
            assert_eq!(select_with(&parse(raw), &ctx, raw), first);
        }
    }
}

pub fn selection_comes_from_source(raw: &str) {
    let map: BlockMap = parse(raw);
    for ctx in contexts() {
        match select_with(&map, &ctx, raw) {
            None => assert!(map.is_empty() && raw.is_empty()),
            Some(sel) if map.is_empty() => {
                assert_eq!(sel.source, Source::Passthrough);
                assert_eq!(sel.text, raw);
            }
            Some(sel) => {
                assert_ne!(sel.source, Source::Passthrough);
                assert!(map.iter().any(|(_, text)| text == sel.text));
            }
        }
    }
}
