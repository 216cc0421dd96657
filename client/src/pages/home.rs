//! Home page: titled, with the site nav leading the content.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::site_nav::SiteNav;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell
            description="Home page"
            page_title="Home"
            leading_nav=|| view! { <SiteNav/> }
        >
            <p>"Hi"</p>
        </PageShell>
    }
}
