//! `ErrorBoundary` fallback for pages that fail to render.
//!
//! The errors are listed rather than hidden; on the server the response is
//! also marked 500 so a broken page is never served as a success.

use leptos::prelude::*;

#[component]
pub fn RenderErrors(errors: ArcRwSignal<Errors>) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    view! {
        <main class="render-errors">
            <h1>"This page could not be rendered"</h1>
            <ul>
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}
