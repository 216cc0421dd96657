//! Page shell rendering.
//!
//! ARCHITECTURE
//! ============
//! `render` turns a config into two contributions: head directives for the
//! host to merge into the document head, and a [`Body`] for the host to
//! mount. The leading nav is an opaque value supplied by the caller; the
//! shell only decides whether it is kept. Nothing here writes markup, so the
//! Leptos client is the single place a page becomes HTML.

use crate::config::{PageShellConfig, validate_description};
use crate::error::ShellError;
use crate::head::{self, HeadTag};

/// Output of one render: what goes into the head and what gets mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage<C, N> {
    pub head: Vec<HeadTag>,
    pub body: Body<C, N>,
}

impl<C, N> RenderedPage<C, N> {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        head::title_of(&self.head)
    }
}

/// The body region: a wrapper element holding the leading nav, when kept,
/// followed by the content. `class` and `style` belong to the wrapper only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body<C, N> {
    pub class: Option<String>,
    pub style: Option<String>,
    pub leading_nav: Option<N>,
    pub content: C,
}

/// Render `config` into head and body contributions.
///
/// Head order is fixed: viewport, charset, description, then the title when
/// one is set. `leading_nav` is kept only when `show_leading_nav` is on; a
/// caller without a nav passes `None` and gets none regardless of the flag.
///
/// # Errors
///
/// Returns the validation error from [`PageShellConfig::validate`]; nothing
/// is rendered in that case.
pub fn render<C, N>(config: PageShellConfig<C>, leading_nav: Option<N>) -> Result<RenderedPage<C, N>, ShellError> {
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "page shell config rejected");
        return Err(err);
    }
    let description = validate_description(config.description.as_deref())?;

    let mut head = vec![
        HeadTag::Viewport(config.viewport.clone()),
        HeadTag::Charset(config.charset.clone()),
        HeadTag::Description(description.to_owned()),
    ];
    if let Some(title) = config.title() {
        head.push(HeadTag::Title(title.to_owned()));
    }

    let leading_nav = leading_nav.filter(|_| config.show_leading_nav);
    tracing::debug!(
        title = config.title().unwrap_or_default(),
        leading_nav = leading_nav.is_some(),
        "page shell rendered"
    );

    let body = Body {
        class: config.container.class().map(str::to_owned),
        style: config.container.style(),
        leading_nav,
        content: config.content,
    };
    Ok(RenderedPage { head, body })
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
