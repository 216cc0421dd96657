//! Page shell model: document metadata plus a wrapped body region.
//!
//! This crate is UI-framework agnostic and writes no markup. It turns a
//! [`PageShellConfig`] into a [`RenderedPage`] made of two separate
//! contributions: the head directives a host merges into the document head,
//! and a [`Body`] describing the wrapper, the optional leading nav and the
//! content. The Leptos client maps both onto its view tree.

pub mod config;
pub mod container;
pub mod error;
pub mod head;
pub mod render;

pub use config::{PageShellConfig, PageShellConfigBuilder};
pub use container::{BoxLayout, Container};
pub use error::ShellError;
pub use head::HeadTag;
pub use render::{Body, RenderedPage, render};
