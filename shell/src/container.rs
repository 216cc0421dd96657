//! Container primitive wrapping the body region.
//!
//! Two variants: a styled box with fixed layout parameters, or a plain
//! wrapper that only carries a structural class marker. Layout parameters
//! land on the wrapper element and never touch the wrapped content.

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

pub const DEFAULT_BOX_CLASS: &str = "content";
pub const DEFAULT_PLAIN_CLASS: &str = "layout";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Container {
    Boxed(BoxLayout),
    Plain { class: String },
}

impl Default for Container {
    fn default() -> Self {
        Self::Boxed(BoxLayout::default())
    }
}

/// Layout parameters for the styled box. Unset parameters are left out of
/// the generated style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxLayout {
    pub class: Option<String>,
    pub width: Option<String>,
    pub max_width: Option<String>,
    pub margin: Option<String>,
    pub padding: Option<String>,
    pub padding_vertical: Option<String>,
}

impl Default for BoxLayout {
    /// Centered, 80% wide up to 800px, 8rem of vertical padding.
    fn default() -> Self {
        Self {
            class: Some(DEFAULT_BOX_CLASS.to_owned()),
            width: Some("80%".to_owned()),
            max_width: Some("800px".to_owned()),
            margin: Some("0 auto".to_owned()),
            padding: None,
            padding_vertical: Some("8rem".to_owned()),
        }
    }
}

impl BoxLayout {
    /// A box with no class and no layout parameters.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            class: None,
            width: None,
            max_width: None,
            margin: None,
            padding: None,
            padding_vertical: None,
        }
    }

    /// Inline CSS for the set parameters, or `None` when nothing is set.
    #[must_use]
    pub fn style(&self) -> Option<String> {
        let mut rules = Vec::new();
        if let Some(width) = &self.width {
            rules.push(format!("width: {width}"));
        }
        if let Some(max_width) = &self.max_width {
            rules.push(format!("max-width: {max_width}"));
        }
        if let Some(margin) = &self.margin {
            rules.push(format!("margin: {margin}"));
        }
        if let Some(padding) = &self.padding {
            rules.push(format!("padding: {padding}"));
        }
        if let Some(vertical) = &self.padding_vertical {
            rules.push(format!("padding-top: {vertical}"));
            rules.push(format!("padding-bottom: {vertical}"));
        }
        if rules.is_empty() { None } else { Some(rules.join("; ")) }
    }
}

impl Container {
    #[must_use]
    pub fn plain(class: impl Into<String>) -> Self {
        Self::Plain { class: class.into() }
    }

    /// # Errors
    ///
    /// Returns [`ShellError::EmptyContainerClass`] for a plain wrapper with a
    /// blank class.
    pub fn validate(&self) -> Result<(), ShellError> {
        match self {
            Self::Plain { class } if class.trim().is_empty() => Err(ShellError::EmptyContainerClass),
            _ => Ok(()),
        }
    }

    /// Class marker for the wrapper element.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Boxed(layout) => layout.class.as_deref(),
            Self::Plain { class } => Some(class.as_str()),
        }
    }

    /// Inline style for the wrapper element. A plain wrapper never has one.
    #[must_use]
    pub fn style(&self) -> Option<String> {
        match self {
            Self::Boxed(layout) => layout.style(),
            Self::Plain { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "container_test.rs"]
mod tests;
