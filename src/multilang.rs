use crate::{
    block_map::BlockMap,
    context::Context,
    parse::{Blocks, parse},
    render::Render,
    select::{Selection, select_with},
};

/// Reusable selector bound to a pair of requested languages.
///
/// Immutable once built, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Multilang<'l> {
    ctx: Context<'l>,
}

impl<'l> Multilang<'l> {
    pub fn builder() -> MultilangBuilder<'l> {
        MultilangBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context<'l> {
        &self.ctx
    }

    /// Parse without selecting.
    #[inline]
    pub fn parse<'a>(&self, content: &'a str) -> BlockMap<'a> {
        parse(content)
    }

    #[inline]
    pub fn blocks<'a>(&self, content: &'a str) -> Blocks<'a> {
        Blocks::new(content)
    }

    pub fn select<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.select_detailed(content).map(|s| s.text)
    }

    pub fn select_detailed<'a>(&self, content: &'a str) -> Option<Selection<'a>> {
        select_with(&parse(content), &self.ctx, content)
    }

    pub fn render<R: Render>(&self, content: &str, renderer: &R) -> R::Output {
        renderer.render(self.select(content))
    }
}

#[derive(Debug, Default)]
pub struct MultilangBuilder<'l> {
    current: Option<&'l str>,
    fallback: Option<&'l str>,
}

impl<'l> MultilangBuilder<'l> {
    pub fn current_language(mut self, lang: &'l str) -> Self {
        self.current = Some(lang);
        self
    }

    pub fn fallback_language(mut self, lang: &'l str) -> Self {
        self.fallback = Some(lang);
        self
    }

    pub fn build(self) -> Multilang<'l> {
        let mut ctx = self.current.map(Context::new).unwrap_or_default();
        if let Some(fb) = self.fallback {
            ctx = ctx.with_fallback(fb);
        }
        Multilang { ctx }
    }
}

/// Content plus the languages to pick it for; the one-shot entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultilangContent<'a> {
    pub content: &'a str,
    pub current_language: &'a str,
    pub fallback_language: Option<&'a str>,
}

impl<'a> MultilangContent<'a> {
    pub fn new(content: &'a str, current_language: &'a str) -> Self {
        Self { content, current_language, fallback_language: None }
    }

    pub fn with_fallback(mut self, fallback_language: &'a str) -> Self {
        self.fallback_language = Some(fallback_language);
        self
    }

    fn selector(&self) -> Multilang<'a> {
        let builder = Multilang::builder().current_language(self.current_language);
        let builder = match self.fallback_language {
            Some(fb) => builder.fallback_language(fb),
            None => builder,
        };
        builder.build()
    }

    /// Fragment to render, or `None` for nothing.
    pub fn resolve(&self) -> Option<&'a str> {
        self.selector().select(self.content)
    }

    pub fn render<R: Render>(&self, renderer: &R) -> R::Output {
        renderer.render(self.resolve())
    }
}
