//! Page modules for route-level screens.
//!
//! Each page is a thin `PageShell` wrapper around its own content.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
