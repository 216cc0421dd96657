//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::render_errors::RenderErrors;
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage};

pub const DEFAULT_LANG: &str = "en";

/// Document language, provided by the host as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentLang(pub String);

impl Default for DocumentLang {
    fn default() -> Self {
        Self(DEFAULT_LANG.to_owned())
    }
}

/// HTML shell rendered on the server for SSR + hydration.
///
/// Charset and viewport are left to each page's `PageShell`, which emits them
/// through `MetaTags`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let DocumentLang(lang) = use_context::<DocumentLang>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/pageshell.css"/>

        <Router>
            <ErrorBoundary fallback=|errors| view! { <RenderErrors errors/> }>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </ErrorBoundary>
        </Router>
    }
}
