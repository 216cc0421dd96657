//! Page shell component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Props go through the `shell` crate first, so validation, head order and
//! nav gating live in one place. Head directives are injected with
//! `leptos_meta`; the body is mounted in place. This is the only path from a
//! page to HTML: the server renders it through `leptos_axum`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use shell::head::DESCRIPTION_META_NAME;
use shell::{Body, Container, HeadTag, PageShellConfig};

fn head_tag_view(tag: HeadTag) -> AnyView {
    match tag {
        HeadTag::Viewport(content) => view! { <Meta name="viewport" content=content/> }.into_any(),
        HeadTag::Charset(charset) => view! { <Meta charset=charset/> }.into_any(),
        HeadTag::Description(content) => {
            view! { <Meta name=DESCRIPTION_META_NAME content=content/> }.into_any()
        }
        HeadTag::Title(text) => view! { <Title text=text/> }.into_any(),
    }
}

/// Wraps page content with document metadata and an optional leading nav.
///
/// A blank description is an error, surfaced to the nearest `ErrorBoundary`
/// instead of rendering a page with missing metadata.
#[component]
pub fn PageShell(
    #[prop(into)] description: String,
    #[prop(optional, into)] page_title: Option<String>,
    #[prop(default = true)] show_leading_nav: bool,
    #[prop(optional, into)] leading_nav: Option<ViewFn>,
    #[prop(optional)] container: Container,
    children: Children,
) -> impl IntoView {
    let mut builder = PageShellConfig::builder(children)
        .description(description)
        .show_leading_nav(show_leading_nav)
        .container(container);
    if let Some(title) = page_title {
        builder = builder.page_title(title);
    }

    builder
        .build()
        .and_then(|config| shell::render(config, leading_nav))
        .map(|page| {
            let head = page.head.into_iter().map(head_tag_view).collect_view();
            let Body { class, style, leading_nav, content } = page.body;

            view! {
                {head}
                <main>
                    <div class=class style=style>
                        {leading_nav.map(|nav| nav.run())}
                        {content()}
                    </div>
                </main>
            }
        })
}

// Children render through `AnyView`, which only writes HTML with `ssr` on.
#[cfg(all(test, feature = "ssr"))]
#[path = "page_shell_test.rs"]
mod tests;
