//! Renderer collaborator.
//!
//! The selected fragment is trusted markup and is emitted verbatim. Nothing
//! here escapes or sanitizes; callers handling untrusted content must do that
//! before or after rendering.

/// Turns a selection (or its absence) into output.
pub trait Render {
    type Output;

    /// `None` means there is nothing to render.
    fn render(&self, markup: Option<&str>) -> Self::Output;
}

/// Renders the fragment as raw HTML, by default inside a `<div>` container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHtml {
    container: Option<&'static str>,
}

impl Default for RawHtml {
    fn default() -> Self {
        Self { container: Some("div") }
    }
}

impl RawHtml {
    /// Wrap in `<tag>…</tag>`.
    pub const fn wrapped(tag: &'static str) -> Self {
        Self { container: Some(tag) }
    }

    /// Emit the fragment with no container.
    pub const fn bare() -> Self {
        Self { container: None }
    }
}

impl Render for RawHtml {
    type Output = Option<String>;

    fn render(&self, markup: Option<&str>) -> Option<String> {
        let markup = markup?;
        Some(match self.container {
            Some(tag) => format!("<{tag}>{markup}</{tag}>"),
            None => markup.to_string(),
        })
    }
}
