//! Leading nav with a single link back to the site root.

use leptos::prelude::*;

#[component]
pub fn BackHeader() -> impl IntoView {
    view! {
        <header class="back-header">
            <a href="/" class="back-header__link">"← Back"</a>
        </header>
    }
}
