//! About page: no title tag, no leading nav, plain wrapper.

use leptos::prelude::*;
use shell::Container;
use shell::container::DEFAULT_PLAIN_CLASS;

use crate::components::page_shell::PageShell;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell description="About" show_leading_nav=false container=Container::plain(DEFAULT_PLAIN_CLASS)>
            <p>"About us"</p>
        </PageShell>
    }
}
