//! Router fallback for unknown paths.

use leptos::prelude::*;

use crate::components::back_header::BackHeader;
use crate::components::page_shell::PageShell;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <PageShell
            description="Page not found"
            page_title="Not found"
            leading_nav=|| view! { <BackHeader/> }
        >
            <p>"Page not found."</p>
        </PageShell>
    }
}
