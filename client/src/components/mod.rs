//! Reusable UI components.
//!
//! `page_shell` is the only component with logic of its own. `back_header`
//! and `site_nav` are leading navs pages pass into it; `render_errors` is
//! the app-wide error fallback.

pub mod back_header;
pub mod page_shell;
pub mod render_errors;
pub mod site_nav;
