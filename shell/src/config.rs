//! Page shell configuration.
//!
//! DESIGN
//! ======
//! A config is a plain record with named fields and documented defaults. The
//! content type is left to the host: the Leptos client stores its `Children`
//! here, tests store plain strings. It is checked at the boundary:
//! `PageShellConfigBuilder::build` and `render` both call `validate`, so a
//! page never renders with a missing description.

use crate::container::Container;
use crate::error::ShellError;
use crate::head::{DEFAULT_CHARSET, DEFAULT_VIEWPORT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageShellConfig<C> {
    /// Page body, placed after the leading nav.
    pub content: C,
    /// Emitted as a title directive only when non-empty.
    pub page_title: Option<String>,
    /// Required; emitted verbatim as the description directive.
    pub description: Option<String>,
    /// Defaults to `true`.
    pub show_leading_nav: bool,
    pub container: Container,
    pub charset: String,
    pub viewport: String,
}

impl<C> PageShellConfig<C> {
    #[must_use]
    pub fn builder(content: C) -> PageShellConfigBuilder<C> {
        PageShellConfigBuilder::new(content)
    }

    /// Check the caller contract.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::MissingDescription`] when the description is
    /// absent or blank, and [`ShellError::EmptyContainerClass`] when a plain
    /// container has no class.
    pub fn validate(&self) -> Result<(), ShellError> {
        validate_description(self.description.as_deref())?;
        self.container.validate()
    }

    /// The title to emit, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.page_title.as_deref().filter(|title| !title.is_empty())
    }
}

/// Returns the description when it is present and not blank.
///
/// # Errors
///
/// Returns [`ShellError::MissingDescription`] otherwise.
pub fn validate_description(description: Option<&str>) -> Result<&str, ShellError> {
    match description {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ShellError::MissingDescription),
    }
}

#[derive(Clone, Debug)]
pub struct PageShellConfigBuilder<C> {
    content: C,
    page_title: Option<String>,
    description: Option<String>,
    show_leading_nav: bool,
    container: Container,
    charset: String,
    viewport: String,
}

impl<C> PageShellConfigBuilder<C> {
    /// Defaults: leading nav on, boxed container, `utf-8`, device-width viewport.
    #[must_use]
    pub fn new(content: C) -> Self {
        Self {
            content,
            page_title: None,
            description: None,
            show_leading_nav: true,
            container: Container::default(),
            charset: DEFAULT_CHARSET.to_owned(),
            viewport: DEFAULT_VIEWPORT.to_owned(),
        }
    }

    #[must_use]
    pub fn page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn show_leading_nav(mut self, show: bool) -> Self {
        self.show_leading_nav = show;
        self
    }

    #[must_use]
    pub fn container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    #[must_use]
    pub fn viewport(mut self, viewport: impl Into<String>) -> Self {
        self.viewport = viewport.into();
        self
    }

    /// Build and validate.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`PageShellConfig::validate`].
    pub fn build(self) -> Result<PageShellConfig<C>, ShellError> {
        let config = PageShellConfig {
            content: self.content,
            page_title: self.page_title,
            description: self.description,
            show_leading_nav: self.show_leading_nav,
            container: self.container,
            charset: self.charset,
            viewport: self.viewport,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
