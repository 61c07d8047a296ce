pub mod block_map;
pub mod context;
pub mod lang;
pub mod multilang;
pub mod parse;
pub mod render;
pub(crate) mod scan;
pub mod select;


pub use block_map::BlockMap;
pub use context::Context;
pub use lang::{EN, LangKey, LangKeyError, OTHER};
pub use multilang::{Multilang, MultilangBuilder, MultilangContent};
pub use parse::{Block, Blocks, parse};
pub use render::{RawHtml, Render};
pub use select::{Selection, Source, select, select_with};
