//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are the Leptos `App` rendered through `leptos_axum`: each route
//! gets a GET/HEAD handler, `leptos_meta` fills the document head, and
//! unknown paths render the app's not-found page with a 404. Static assets
//! built by cargo-leptos are served from `/pkg`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, DocumentLang, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full site router with Leptos options loaded from the environment.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (malformed
/// `LEPTOS_*` environment variables).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(site_router(conf.leptos_options, &config.lang))
}

pub fn site_router(leptos_options: LeptosOptions, lang: &str) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(routes = routes.len(), "leptos routes generated");

    let lang = DocumentLang(lang.to_owned());
    let context = move || provide_context(lang.clone());
    let app_fn = {
        let opts = leptos_options.clone();
        move || shell(opts.clone())
    };

    let leptos_router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), app_fn.clone())
        .fallback(render_app_to_stream_with_context(context, app_fn))
        .with_state(leptos_options.clone());

    // Assets (WASM, JS, CSS) live under the site root's pkg directory.
    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(&*leptos_options.site_pkg_dir);

    leptos_router
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
