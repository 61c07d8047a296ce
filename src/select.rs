//! Language Selector.
//!
//! Priority chain, first hit wins:
//!
//! 1. no blocks at all → the raw source, untouched
//! 2. current language
//! 3. fallback language, when given
//! 4. `en`
//! 5. `other`
//! 6. the first block in scan order
//!
//! A block with empty text is still a hit. The only way to get nothing back
//! is an empty source with no blocks.

use crate::{
    block_map::BlockMap,
    context::Context,
    lang::{EN, LangKey, OTHER},
};
use tracing::debug;

/// Which step of the chain produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Passthrough,
    Current,
    Fallback,
    English,
    Other,
    FirstAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub text: &'a str,
    pub source: Source,
}

/// Run the chain for `ctx` over `map`, the parsed form of `raw`.
pub fn select_with<'a>(map: &BlockMap<'a>, ctx: &Context<'_>, raw: &'a str) -> Option<Selection<'a>> {
    if map.is_empty() {
        if raw.is_empty() {
            debug!("nothing to render");
            return None;
        }
        debug!(source = ?Source::Passthrough, "no mlang blocks, passing source through");
        return Some(Selection { text: raw, source: Source::Passthrough });
    }

    let hit = |key: &LangKey<'_>, source| map.get(key.as_str()).map(|text| Selection { text, source });

    let selection = hit(&ctx.current, Source::Current)
        .or_else(|| ctx.fallback.as_ref().and_then(|fb| hit(fb, Source::Fallback)))
        .or_else(|| hit(&EN, Source::English))
        .or_else(|| hit(&OTHER, Source::Other))
        .or_else(|| {
            map.first()
                .map(|(_, text)| Selection { text, source: Source::FirstAvailable })
        });

    match &selection {
        Some(s) => debug!(current = %ctx.current, source = ?s.source, "selected mlang block"),
        None => debug!(current = %ctx.current, "no mlang block selected"),
    }
    selection
}

/// Pick the text to show for `current` (and optionally `fallback`) from the
/// blocks parsed out of `raw`. `None` means render nothing.
pub fn select<'a>(
    map: &BlockMap<'a>,
    current: &str,
    fallback: Option<&str>,
    raw: &'a str,
) -> Option<&'a str> {
    let mut ctx = Context::new(current);
    if let Some(fb) = fallback {
        ctx = ctx.with_fallback(fb);
    }
    select_with(map, &ctx, raw).map(|s| s.text)
}
