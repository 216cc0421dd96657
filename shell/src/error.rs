//! Validation errors raised before a page shell renders.

/// A caller-contract violation detected at the config boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// The description directive is required and must not be blank.
    #[error("page description is required")]
    MissingDescription,

    /// A plain container needs a non-empty class marker.
    #[error("plain container class must not be empty")]
    EmptyContainerClass,
}
