//! Document head directives contributed by a page shell.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1";
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Meta name under which the description directive is emitted.
pub const DESCRIPTION_META_NAME: &str = "Description";

/// One metadata directive. Values are stored verbatim; escaping belongs to
/// whichever view layer writes them out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HeadTag {
    Viewport(String),
    Charset(String),
    Description(String),
    Title(String),
}

impl HeadTag {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Viewport(v) | Self::Charset(v) | Self::Description(v) | Self::Title(v) => v,
        }
    }
}

#[must_use]
pub fn title_of(tags: &[HeadTag]) -> Option<&str> {
    tags.iter().find_map(|tag| match tag {
        HeadTag::Title(text) => Some(text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
#[path = "head_test.rs"]
mod tests;
