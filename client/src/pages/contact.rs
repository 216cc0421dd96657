//! Contact page: back header and a narrower box with even padding.

use leptos::prelude::*;
use shell::{BoxLayout, Container};

use crate::components::back_header::BackHeader;
use crate::components::page_shell::PageShell;

/// 60% wide up to 640px, 2rem of padding on every side.
pub fn contact_container() -> Container {
    Container::Boxed(BoxLayout {
        width: Some("60%".to_owned()),
        max_width: Some("640px".to_owned()),
        padding: Some("2rem".to_owned()),
        padding_vertical: None,
        ..BoxLayout::default()
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageShell
            description="How to reach us"
            page_title="Contact"
            leading_nav=|| view! { <BackHeader/> }
            container=contact_container()
        >
            <p>"Write to hello@example.com"</p>
        </PageShell>
    }
}
