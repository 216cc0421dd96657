//! Fixed site navigation used as a leading nav.

use leptos::prelude::*;

/// Route path and label for each link, in display order.
pub const SITE_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/about", "About"), ("/contact", "Contact")];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            {SITE_LINKS
                .iter()
                .map(|(href, label)| view! { <a href=*href class="site-nav__link">{*label}</a> })
                .collect_view()}
        </nav>
    }
}
